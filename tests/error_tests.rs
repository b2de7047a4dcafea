use std::error::Error as StdError;

use groundwork::{err, CaptureSite, Error, ErrorKind, TransientError};

#[test]
fn every_kind_has_its_own_default_message() {
    let expected = [
        (ErrorKind::General, "Error!"),
        (ErrorKind::ProgramExit, "Program exited!"),
        (ErrorKind::Logic, "Logic error!"),
        (ErrorKind::Argument, "Invalid argument!"),
        (ErrorKind::Range, "Out of range!"),
        (ErrorKind::NotSupported, "Not supported!"),
        (ErrorKind::InvalidState, "Invalid state!"),
        (ErrorKind::AssertionFailure, "Assertion failed!"),
        (ErrorKind::Duplicate, "Object already exists!"),
        (ErrorKind::Runtime, "Runtime error!"),
        (ErrorKind::Configuration, "Configuration error!"),
        (ErrorKind::Parse, "Parse error!"),
        (ErrorKind::Concurrency, "Concurrency error!"),
        (ErrorKind::TaskRejected, "Task rejected!"),
        (ErrorKind::PermissionDenied, "Permission denied!"),
        (ErrorKind::Timeout, "Timeout!"),
        (ErrorKind::System, "System error!"),
        (ErrorKind::File, "File error!"),
        (ErrorKind::Network, "Network error!"),
        (ErrorKind::Database, "Database error!"),
        (ErrorKind::ExternalDependency, "External dependency error!"),
    ];

    assert_eq!(expected.len(), ErrorKind::ALL.len());
    for (kind, message) in expected {
        assert_eq!(kind.default_message(), message, "default for {kind}");
        assert_eq!(Error::new(kind).message(), message);
    }
}

#[test]
fn default_message_is_the_kinds_own_not_an_ancestors() {
    // Range sits under Argument under Logic; each level keeps its own text.
    assert_eq!(Error::new(ErrorKind::Range).message(), "Out of range!");
    assert_eq!(Error::new(ErrorKind::Argument).message(), "Invalid argument!");
    assert_eq!(Error::new(ErrorKind::Logic).message(), "Logic error!");
}

#[test]
fn explicit_message_is_stored_exactly() {
    let err = Error::with_message(ErrorKind::System, "disk on fire");
    assert_eq!(err.message(), "disk on fire");
    assert_eq!(err.to_string(), "disk on fire");
    assert_eq!(err.kind(), ErrorKind::System);
}

#[test]
fn absent_text_becomes_the_empty_string() {
    let err = Error::with_text(ErrorKind::Network, None);
    assert_eq!(err.message(), "");

    let err = Error::with_text(ErrorKind::Network, Some("link down"));
    assert_eq!(err.message(), "link down");
}

#[test]
fn constructors_capture_their_own_call_site() {
    let err = Error::new(ErrorKind::Timeout);

    assert!(err.has_site());
    let site = err.site().expect("site captured");
    assert_eq!(site.file(), Some(file!()));
    assert!(site.has_info());
}

#[test]
fn two_constructions_at_different_lines_record_different_sites() {
    let first = Error::new(ErrorKind::Timeout);
    let second = Error::new(ErrorKind::Timeout);

    let a = first.site().unwrap().line();
    let b = second.site().unwrap().line();
    assert_ne!(a, b);
}

#[test]
fn from_parts_attaches_nothing_implicitly() {
    let err = Error::from_parts(ErrorKind::Parse, "replayed", None);
    assert!(!err.has_site());
    assert!(err.site().is_none());

    // An explicit but empty site is present yet uninformative.
    let err = Error::from_parts(ErrorKind::Parse, "replayed", Some(CaptureSite::empty()));
    assert!(err.has_site());
    assert!(!err.site().unwrap().has_info());
}

#[test]
fn site_can_be_replaced_or_dropped() {
    let synthetic = CaptureSite::new(Some("gen.rs"), 3, None);
    let err = Error::new(ErrorKind::File).with_site(synthetic);
    assert_eq!(err.site(), Some(&synthetic));

    let err = err.detached();
    assert!(!err.has_site());
}

#[test]
fn descendants_match_every_ancestor() {
    let file_error = Error::new(ErrorKind::File);
    assert!(file_error.matches(ErrorKind::File));
    assert!(file_error.matches(ErrorKind::System));
    assert!(file_error.matches(ErrorKind::Runtime));
    assert!(file_error.matches(ErrorKind::General));
    assert!(!file_error.matches(ErrorKind::Logic));
    assert!(!file_error.matches(ErrorKind::Network));

    assert!(ErrorKind::Range.is_a(ErrorKind::Argument));
    assert!(ErrorKind::Range.is_a(ErrorKind::Logic));
    assert!(ErrorKind::Range.is_a(ErrorKind::General));
    assert!(!ErrorKind::Range.is_a(ErrorKind::Runtime));

    assert!(ErrorKind::TaskRejected.is_a(ErrorKind::Concurrency));
    assert!(ErrorKind::TaskRejected.is_a(ErrorKind::Runtime));
    assert!(!ErrorKind::Concurrency.is_a(ErrorKind::TaskRejected));
}

#[test]
fn every_kind_reaches_the_root() {
    assert_eq!(ErrorKind::General.parent(), None);
    for kind in ErrorKind::ALL {
        assert!(kind.is_a(kind));
        assert!(kind.is_a(ErrorKind::General));
    }
}

#[test]
fn cause_chain_preserves_the_inner_error() {
    let inner = Error::with_message(ErrorKind::File, "inner file error");
    let outer = Error::with_message(ErrorKind::System, "outer system error").caused_by(inner);

    assert_eq!(outer.message(), "outer system error");

    let cause = outer.cause().expect("cause attached");
    assert_eq!(cause.kind(), ErrorKind::File);
    assert_eq!(cause.message(), "inner file error");
    assert!(cause.cause().is_none());
}

#[test]
fn chain_walks_outermost_first() {
    let err = Error::with_message(ErrorKind::Configuration, "reload failed")
        .caused_by(
            Error::with_message(ErrorKind::File, "conf.d unreadable")
                .caused_by(Error::with_message(ErrorKind::PermissionDenied, "mode 000")),
        );

    let messages: Vec<&str> = err.chain().map(|e| e.message()).collect();
    assert_eq!(messages, vec!["reload failed", "conf.d unreadable", "mode 000"]);
    assert_eq!(
        err.error_chain(),
        "reload failed -> conf.d unreadable -> mode 000"
    );
}

#[test]
fn source_exposes_the_cause_to_the_std_error_ecosystem() {
    let err = Error::new(ErrorKind::Runtime).caused_by(Error::new(ErrorKind::Database));

    let source = err.source().expect("source present");
    assert_eq!(source.to_string(), "Database error!");

    let leaf = Error::new(ErrorKind::Database);
    assert!(leaf.source().is_none());
}

#[test]
fn from_kind_uses_the_default_message_without_a_site() {
    let err: Error = ErrorKind::Duplicate.into();
    assert_eq!(err.message(), "Object already exists!");
    assert!(!err.has_site());
}

#[test]
fn kind_names_render_for_logging() {
    assert_eq!(ErrorKind::Range.name(), "Range");
    assert_eq!(ErrorKind::ExternalDependency.to_string(), "ExternalDependency");
}

#[test]
fn transient_kinds_are_exactly_the_retryable_ones() {
    assert!(ErrorKind::Timeout.is_transient());
    assert!(ErrorKind::TaskRejected.is_transient());

    assert!(ErrorKind::Configuration.is_permanent());
    assert!(ErrorKind::AssertionFailure.is_permanent());
    assert!(ErrorKind::Network.is_permanent());
    assert!(ErrorKind::Concurrency.is_permanent());

    assert!(Error::new(ErrorKind::Timeout).is_transient());
    assert!(Error::new(ErrorKind::Parse).is_permanent());
}

#[test]
fn err_macro_builds_kind_message_and_site() {
    let plain = err!(Timeout);
    assert_eq!(plain.kind(), ErrorKind::Timeout);
    assert_eq!(plain.message(), "Timeout!");
    let site = plain.site().unwrap();
    assert_eq!(site.file(), Some(file!()));
    assert!(site
        .function()
        .unwrap()
        .ends_with("err_macro_builds_kind_message_and_site"));

    let detailed = err!(Database, "query {} timed out", 7);
    assert_eq!(detailed.kind(), ErrorKind::Database);
    assert_eq!(detailed.message(), "query 7 timed out");
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;

    #[test]
    fn error_kind_serializes_as_its_name() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::Timeout).unwrap(),
            "\"Timeout\""
        );
        let parsed: ErrorKind = serde_json::from_str("\"Range\"").unwrap();
        assert_eq!(parsed, ErrorKind::Range);
    }
}
