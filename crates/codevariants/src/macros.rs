//! Macros for authoring scenario tables in Rust source

/// Declare the scenario table of one component
///
/// Environment keys are written as identifiers: either the author aliases
/// (`react`, `vanilla`, `extjs`, `typescript`) or the canonical labels with
/// `_` in place of `-`. Keys are not checked here; an unknown key is reported
/// by the loader like any other unknown label.
///
/// # Examples
///
/// ```rust
/// use codevariants::{scenarios, CatalogLoader};
///
/// let table = scenarios! {
///     "Backdrop" => {
///         "default" => {
///             react: "<Backdrop />",
///             vanilla: r#"<div class="backdrop"></div>"#,
///         },
///         "transparent" => {
///             react: "<Backdrop transparent />",
///         },
///     }
/// };
///
/// let catalog = CatalogLoader::new().load_table(&table).unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
#[macro_export]
macro_rules! scenarios {
    ($component:expr => {
        $($scenario:expr => { $($env:ident : $body:expr),* $(,)? }),* $(,)?
    }) => {{
        let table = $crate::AuthorTable::new($component);
        $(
            let bodies: ::std::vec::Vec<(::std::string::String, ::std::string::String)> =
                ::std::vec![$((stringify!($env).replace('_', "-"), ::std::string::String::from($body))),*];
            let table = table.scenario($scenario, bodies);
        )*
        table
    }};
}
