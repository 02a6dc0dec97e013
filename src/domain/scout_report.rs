use std::fmt;

const NO_RESULT_HINTS: [&str; 3] = [
    "No HR professionals found at this company on LinkedIn",
    "LinkedIn blocking search results",
    "Company name not matching LinkedIn profiles",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ScoutReport {
    Found(Vec<String>),
    NoResults,
}

impl ScoutReport {
    pub fn from_urls(urls: Vec<String>) -> Self {
        match urls.is_empty() {
            true => ScoutReport::NoResults,
            false => ScoutReport::Found(urls),
        }
    }
}

impl fmt::Display for ScoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoutReport::Found(urls) => {
                writeln!(f, "✅ Found {} unique LinkedIn profiles:", urls.len())?;
                for (i, url) in urls.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, url)?;
                }
            }
            ScoutReport::NoResults => {
                writeln!(f, "No LinkedIn profiles found for the specified search.")?;
                writeln!(f, "This might be due to:")?;
                for hint in NO_RESULT_HINTS {
                    writeln!(f, "- {}", hint)?;
                }
            }
        }

        Ok(())
    }
}
