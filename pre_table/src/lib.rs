extern crate proc_macro;
use std::iter::FromIterator;

use proc_macro::{
	TokenStream,
	TokenTree,
	Delimiter,
	Spacing,
	Literal,
	Ident,
	Punct,
	Group,
	Span,
};

use note_table::{build_table, render_checked, RustSource};

/// `freq_table!(F)` expands to `const F: [f64; 128]`, the frequency of every MIDI key.
#[proc_macro]
pub fn freq_table(items: TokenStream) -> TokenStream {
	let name = table_ident(items, "Missing table identifier");
	let notes = build_table();

	array( name, "f64", notes.len(),
		|i| TokenTree::from(Literal::f64_unsuffixed(notes[i].frequency_hz()))
	)
}

/// `pitch_values!(pitch)` expands to `pub mod pitch { ... }` holding the same source the
/// generator writes: one constant per key and the `PITCH_VALUES` table.
#[proc_macro]
pub fn pitch_values(items: TokenStream) -> TokenStream {
	let name = table_ident(items, "Missing module identifier");

	let source = render_checked(&RustSource::default(), &build_table())
		.unwrap_or_else(|e| panic!("Unable to render note table: {}", e));
	let body: TokenStream = source.parse()
		.unwrap_or_else(|e| panic!("Rendered note table is not valid Rust: {:?}", e));

	let tokens: Vec<TokenTree> = vec![
		Ident::new("pub", Span::call_site()).into(),
		Ident::new("mod", Span::call_site()).into(),
		name.into(),
		Group::new(Delimiter::Brace, body).into(),
	];

	TokenStream::from_iter(tokens.into_iter())
}

fn table_ident(items: TokenStream, missing: &str) -> Ident {
	match items.into_iter().next().expect(missing) {
		TokenTree::Ident(i) => i,
		_ => panic!("Invalid table identifier"),
	}
}

fn array(name: Ident, typ: &str, size: usize, arr_value: impl Fn(usize) -> TokenTree) -> TokenStream {
	let mut tokens: Vec<TokenTree> = vec![
		Ident::new("const", Span::call_site()).into(),
		name.into(),
		Punct::new(':', Spacing::Alone).into(),
	];

	tokens.push(array_type(typ, size));
	tokens.push(Punct::new('=', Spacing::Alone).into());
	tokens.push(array_value(size, arr_value));
	tokens.push(Punct::new(';', Spacing::Alone).into());

	TokenStream::from_iter(tokens.into_iter())
}

fn array_type(typ: &str, size: usize) -> TokenTree {
	let arr_type: Vec<TokenTree> = vec![
		Ident::new(typ, Span::call_site()).into(),
		Punct::new(';', Spacing::Alone).into(),
		Literal::usize_unsuffixed(size).into(),
	];

	Group::new(Delimiter::Bracket, TokenStream::from_iter(arr_type.into_iter())).into()
}

fn array_value(size: usize, to_token_tree: impl Fn(usize) -> TokenTree) -> TokenTree {
	Group::new(Delimiter::Bracket,
		(0..size)
			.flat_map(|i| vec![
				to_token_tree(i),
				Punct::new(',', Spacing::Alone).into(),
			])
			.collect()
	).into()
}
