use crate::entities::ImportRules;

/// RON form of the import rules, e.g.
/// `(categories: ["Groceries"], payment_methods: ["Cash"])`.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ImportRulesModel {
    pub categories: Vec<String>,
    pub payment_methods: Vec<String>,
}

impl Into<ImportRules> for ImportRulesModel {
    fn into(self) -> ImportRules {
        ImportRules {
            categories: self.categories,
            payment_methods: self.payment_methods,
        }
    }
}
