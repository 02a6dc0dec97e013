use itertools::Itertools;

use super::profile_url::PROFILE_MARKER;

pub const DEFAULT_COMPANY: &str = "Microsoft";

const HR_ROLES: [&str; 3] = ["Human Resources", "Talent Acquisition", "Recruiter"];

pub fn resolve_company_name<'a>(input: &'a str, fallback: &'a str) -> &'a str {
    match input.trim() {
        "" => fallback,
        name => name,
    }
}

/// The company name goes into the query as typed, quotes included.
pub fn build_hr_search_query(company_name: &str) -> String {
    let company_name = resolve_company_name(company_name, DEFAULT_COMPANY);
    let roles = HR_ROLES.iter().map(|role| format!("'{}'", role)).join(" OR ");

    format!("({}) '{}' site:{}", roles, company_name, PROFILE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::{build_hr_search_query, resolve_company_name};

    #[test]
    fn build_hr_search_query_valid() {
        assert_eq!(
            build_hr_search_query("Acme"),
            "('Human Resources' OR 'Talent Acquisition' OR 'Recruiter') 'Acme' site:linkedin.com/in/"
        );
    }

    #[test]
    fn build_hr_search_query_blank_uses_default() {
        assert_eq!(
            build_hr_search_query("  "),
            "('Human Resources' OR 'Talent Acquisition' OR 'Recruiter') 'Microsoft' site:linkedin.com/in/"
        );
    }

    #[test]
    fn build_hr_search_query_keeps_quotes() {
        assert_eq!(
            build_hr_search_query(r#"Ben & Jerry's "Ice Cream""#),
            r#"('Human Resources' OR 'Talent Acquisition' OR 'Recruiter') 'Ben & Jerry's "Ice Cream"' site:linkedin.com/in/"#
        );
    }

    #[test]
    fn resolve_company_name_trims() {
        assert_eq!(resolve_company_name("  Acme Corp\n", "Microsoft"), "Acme Corp");
        assert_eq!(resolve_company_name("\n", "Microsoft"), "Microsoft");
        assert_eq!(resolve_company_name("", "Globex"), "Globex");
    }
}
