//! Macros for call-site capture and error construction.
//!
//! - [`macro@crate::site`] - Captures file, line, and the enclosing function
//!   name at the expansion point.
//! - [`macro@crate::err`] - Builds an [`Error`](crate::Error) of a given kind
//!   with a full [`site!`](crate::site!) capture attached.
//! - [`macro@crate::lookup_table`] - Literal construction sugar for
//!   [`LookupTable`](crate::LookupTable), usable in `const` contexts.

/// Captures a [`CaptureSite`](crate::CaptureSite) with all three fields
/// filled: file, line, and the enclosing function.
///
/// The function name comes from the type name of a local marker type, so it
/// renders as a full module path (inside closures it ends with
/// `{{closure}}`).
///
/// # Examples
///
/// ```
/// use groundwork::site;
///
/// fn connect() -> groundwork::CaptureSite {
///     site!()
/// }
///
/// let here = connect();
/// assert!(here.has_info());
/// assert!(here.function().unwrap().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! site {
    () => {{
        struct __Site;
        let type_name = ::core::any::type_name::<__Site>();
        let function = match type_name.strip_suffix("::__Site") {
            Some(stripped) => stripped,
            None => type_name,
        };
        $crate::CaptureSite::new(Some(file!()), line!(), Some(function))
    }};
}

/// Builds an [`Error`](crate::Error) of the named kind, with the expansion
/// point captured as its site (including the enclosing function name).
///
/// # Syntax
///
/// - `err!(Kind)` - the kind's canonical default message
/// - `err!(Kind, "format {}", args)` - a formatted message
///
/// # Examples
///
/// ```
/// use groundwork::{err, ErrorKind};
///
/// let plain = err!(Timeout);
/// assert_eq!(plain.message(), "Timeout!");
///
/// let detailed = err!(File, "missing {}", "data.bin");
/// assert_eq!(detailed.message(), "missing data.bin");
/// assert_eq!(detailed.kind(), ErrorKind::File);
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident $(,)?) => {
        $crate::Error::new($crate::ErrorKind::$kind).with_site($crate::site!())
    };
    ($kind:ident, $($arg:tt)*) => {
        $crate::Error::with_message($crate::ErrorKind::$kind, format!($($arg)*))
            .with_site($crate::site!())
    };
}

/// Builds a [`LookupTable`](crate::LookupTable) from literal `(key, value)`
/// pairs, in declaration order. Usable in `const` contexts.
///
/// # Examples
///
/// ```
/// use groundwork::{lookup_table, LookupTable};
///
/// const CODES: LookupTable<&str, u16, 2> = lookup_table![
///     ("not_found", 404),
///     ("teapot", 418),
/// ];
///
/// assert_eq!(CODES.find(&"teapot"), Some(&418));
/// ```
#[macro_export]
macro_rules! lookup_table {
    ($(($key:expr, $value:expr)),* $(,)?) => {
        $crate::LookupTable::new([
            $($crate::LookupEntry::new($key, $value)),*
        ])
    };
}
