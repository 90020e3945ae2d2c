//! Predefined test cases hosts can offer as regex-tester presets.

/// A ready-made pattern, test text, and flag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
    pub name: &'static str,
    pub pattern: &'static str,
    pub test_string: &'static str,
    pub flags: &'static str,
    pub description: &'static str,
}

pub const SAMPLE_CASES: &[SampleCase] = &[
    SampleCase {
        name: "Email Address",
        pattern: r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        test_string: "user@example.com\nanother.user@domain.co.uk\ninvalid.email\nuser@.com\ntest@site.io",
        flags: "i",
        description: "Matches standard email addresses",
    },
    SampleCase {
        name: "Phone Number",
        pattern: r"(\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}",
        test_string: "+1 (555) 123-4567\n(555) 123-4567\n555-123-4567\n5551234567\n12345",
        flags: "",
        description: "Matches various phone number formats",
    },
    SampleCase {
        name: "URL",
        pattern: r"(https?:\/\/)?([\da-z\.-]+)\.([a-z\.]{2,6})([\/\w \.-]*)*\/?",
        test_string: "https://www.example.com\nhttp://sub.example.co.uk/path\nwww.example.com\ninvalid_url\nexample",
        flags: "i",
        description: "Matches URLs with or without protocol",
    },
    SampleCase {
        name: "Date (YYYY-MM-DD)",
        pattern: r"(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])",
        test_string: "2023-01-15\n2023-04-31\n2023-13-01\n2023-02-29\n2022-12-12",
        flags: "",
        description: "Matches dates in YYYY-MM-DD format",
    },
    SampleCase {
        name: "Credit Card",
        pattern: r"(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12}|(?:2131|1800|35\d{3})\d{11})",
        test_string: "4532123456788901\n5412756789012345\n6011111111111117\n1234567890123456\nabc123",
        flags: "",
        description: "Matches common credit card numbers",
    },
    SampleCase {
        name: "Website URL",
        pattern: r"(https?:\/\/)?([\w-]+\.)+[\w-]+(\/[\w-./?%&=]*)?",
        test_string: "https://habitpulse.xyz/\nhttp://example.com/path?param=value\nwww.test-site.com\nsubdomain.domain.co.uk/path\nnot-a-url",
        flags: "i",
        description: "Matches website URLs with various formats",
    },
];

/// Look a sample up by its display name.
pub fn by_name(name: &str) -> Option<&'static SampleCase> {
    SAMPLE_CASES.iter().find(|case| case.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::evaluate;
    use crate::pattern::{FlagSet, Pattern};

    #[test]
    fn every_sample_compiles() {
        for case in SAMPLE_CASES {
            let flags = FlagSet::parse(case.flags).unwrap();
            assert!(
                Pattern::compile(case.pattern, flags).is_ok(),
                "sample '{}' failed to compile",
                case.name
            );
        }
    }

    #[test]
    fn email_sample_finds_the_addresses() {
        let case = by_name("Email Address").unwrap();
        let mut flags = FlagSet::parse(case.flags).unwrap();
        flags.global = true;
        let set = evaluate(case.pattern, &flags, case.test_string).unwrap();
        let texts: Vec<&str> = set.iter().map(|r| r.matched_text.as_str()).collect();
        assert!(texts.contains(&"user@example.com"));
        assert!(texts.contains(&"another.user@domain.co.uk"));
        assert!(texts.contains(&"test@site.io"));
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("Credit Card").is_some());
        assert!(by_name("No Such Sample").is_none());
    }
}
