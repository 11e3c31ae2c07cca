pub mod assembler;
pub mod ast;
pub mod connection;
pub mod error;
pub mod id_gen;
pub mod kind;
pub mod parser;
pub mod provider;
pub mod renderer;
pub mod sketcher;

pub use assembler::Options;
pub use error::{Error, Result};
pub use provider::Provider;

pub fn render(input: &str) -> Result<String> {
    render_with_options(input, &Options::default())
}

pub fn render_with_options(input: &str, options: &Options) -> Result<String> {
    let draft = parser::parse_draft(input)?;
    assembler::sketch(&draft, options)
}
