/// Property-based tests using proptest
/// Tests invariants of the id validation and conversion that should hold
/// for all inputs
use proptest::prelude::*;

use fbgdl::errors::AppError;
use fbgdl::models::{GraphError, GraphProfile};

fn profile_with_id(id: String) -> GraphProfile {
    GraphProfile {
        id,
        name: "Name".to_string(),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        link: "https://example.com/profile".to_string(),
        username: "handle".to_string(),
        gender: "female".to_string(),
        locale: "en_GB".to_string(),
        error: None,
    }
}

// Property: conversion should never panic, whatever the id looks like
proptest! {
    #[test]
    fn conversion_never_panics(id in "\\PC*") {
        let _ = profile_with_id(id).into_record();
    }
}

// Property: every u64 formatted to decimal is canonical and round-trips
proptest! {
    #[test]
    fn canonical_ids_round_trip(uid in any::<u64>()) {
        let user = profile_with_id(uid.to_string()).into_record();
        prop_assert!(user.is_ok());
        prop_assert_eq!(user.unwrap().uid, uid);
    }

    #[test]
    fn successful_conversion_copies_fields(uid in any::<u64>()) {
        let profile = profile_with_id(uid.to_string());
        let user = profile.clone().into_record().unwrap();
        prop_assert_eq!(user.name, profile.name);
        prop_assert_eq!(user.first, profile.first_name);
        prop_assert_eq!(user.last, profile.last_name);
        prop_assert_eq!(user.link, profile.link);
        prop_assert_eq!(user.username, profile.username);
        prop_assert_eq!(user.gender, profile.gender);
        prop_assert_eq!(user.locale, profile.locale);
    }
}

// Property: non-canonical decimal forms are always refused
proptest! {
    #[test]
    fn leading_zeros_always_rejected(uid in any::<u64>(), zeros in 1usize..4) {
        let id = format!("{}{}", "0".repeat(zeros), uid);
        let result = profile_with_id(id).into_record();
        prop_assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }

    #[test]
    fn signed_forms_always_rejected(
        uid in any::<u64>(),
        sign in prop::sample::select(vec!["-", "+"])
    ) {
        let id = format!("{}{}", sign, uid);
        let result = profile_with_id(id).into_record();
        prop_assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }

    #[test]
    fn non_digit_ids_always_rejected(id in "[a-zA-Z !.]{1,20}") {
        let result = profile_with_id(id).into_record();
        prop_assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }
}

// Property: a non-empty error message always wins, whatever the id
proptest! {
    #[test]
    fn error_message_always_rejects(id in "\\PC*", message in "\\PC{1,40}") {
        prop_assume!(!message.is_empty());
        let mut profile = profile_with_id(id);
        profile.error = Some(GraphError {
            message,
            error_type: "OAuthException".to_string(),
            code: 100,
        });
        let result = profile.into_record();
        let is_remote_rejected = matches!(result, Err(AppError::RemoteRejected { .. }));
        prop_assert!(is_remote_rejected);
    }
}
