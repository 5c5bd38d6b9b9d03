use std::collections::BTreeMap;

/// Canonical name the salary column is relabelled to.
pub const SALARY: &str = "salary";
pub const DEPARTMENT: &str = "department";
pub const NAME: &str = "name";
pub const HOURS_WORKED: &str = "hours_worked";

/// One parsed data row: column name → raw string value.
///
/// Values are kept as written in the source file; numeric interpretation is
/// left to the report that consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecord {
    fields: BTreeMap<String, String>,
}

impl EmployeeRecord {
    /// Looks up a raw field value by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Department used as the aggregation sort key; absent reads as "".
    pub fn department(&self) -> &str {
        self.get(DEPARTMENT).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.get(NAME).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EmployeeRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
