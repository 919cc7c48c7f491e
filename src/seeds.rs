//! Seed token collection from operator-supplied target fields

use serde::{Deserialize, Serialize};

/// Target details supplied by the operator. Each populated field
/// contributes one seed token; `keywords` is comma-separated and may
/// contribute several.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedInput {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub pet_name: Option<String>,
    pub school: Option<String>,
    pub city: Option<String>,
    pub birth_year: Option<String>,
    pub birth_date: Option<String>,
    pub partner: Option<String>,
    pub lucky_number: Option<String>,
    pub keywords: Option<String>,
}

impl SeedInput {
    /// Flatten into the ordered seed token list. Field order is fixed;
    /// it determines permutation enumeration order, not the final
    /// (sorted) output set. Keyword entries are trimmed and blank ones
    /// dropped.
    pub fn collect(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for field in [
            &self.username,
            &self.full_name,
            &self.nickname,
            &self.pet_name,
            &self.school,
            &self.city,
            &self.birth_year,
            &self.birth_date,
            &self.partner,
            &self.lucky_number,
        ] {
            if let Some(value) = field {
                if !value.is_empty() {
                    tokens.push(value.clone());
                }
            }
        }
        if let Some(keywords) = &self.keywords {
            tokens.extend(
                keywords
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string),
            );
        }
        tokens
    }

    /// Whether any field is populated
    pub fn is_empty(&self) -> bool {
        self.collect().is_empty()
    }
}
