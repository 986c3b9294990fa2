use proptest::prelude::*;

use tessera_core::traits::{IScrubber, ScrubContext};
use tessera_core::SensitivityTier;
use tessera_privacy::PatternScrubber;

fn ctx(tier: SensitivityTier) -> ScrubContext<'static> {
    ScrubContext {
        unit_id: "prop",
        source_uri: "prop://unit",
        source_type: "chat_message",
        tier,
        file_path: None,
    }
}

fn filler() -> impl Strategy<Value = String> {
    "[a-z ]{0,40}"
}

proptest! {
    #[test]
    fn emails_never_survive(
        before in filler(),
        user in "[a-w]{3,10}",
        domain in "[a-w]{3,10}",
        after in filler(),
    ) {
        let email = format!("{user}@{domain}.io");
        let text = format!("{before} {email} {after}");
        let out = PatternScrubber::new().scrub(&text, &ctx(SensitivityTier::Sensitive)).unwrap();
        prop_assert!(!out.redacted_text.contains(&email));
        prop_assert!(out.entities_found >= 1);
    }

    #[test]
    fn aws_access_keys_never_survive(
        before in filler(),
        key in "AKIA[0-9A-W]{16}",
        after in filler(),
    ) {
        let text = format!("{before} {key} {after}");
        let out = PatternScrubber::new().scrub(&text, &ctx(SensitivityTier::MaybeSensitive)).unwrap();
        prop_assert!(!out.redacted_text.contains(&key));
        prop_assert!(out.secrets_found >= 1);
    }

    #[test]
    fn scrubbing_is_idempotent(text in "[a-zA-Z0-9@.:/ =_-]{0,80}") {
        let scrubber = PatternScrubber::new();
        let c = ctx(SensitivityTier::Sensitive);
        let once = scrubber.scrub(&text, &c).unwrap();
        let twice = scrubber.scrub(&once.redacted_text, &c).unwrap();
        prop_assert_eq!(&twice.redacted_text, &once.redacted_text);
    }

    #[test]
    fn scrubbing_is_deterministic(text in "[a-zA-Z0-9@.:/ =_-]{0,80}", seed in any::<u64>()) {
        let c = ctx(SensitivityTier::Sensitive);
        let a = PatternScrubber::pseudonymizing(seed).scrub(&text, &c).unwrap();
        let b = PatternScrubber::pseudonymizing(seed).scrub(&text, &c).unwrap();
        prop_assert_eq!(a, b);
    }
}
