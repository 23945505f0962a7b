use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct TeamRow {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserRow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_field: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub skills: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MembershipRow {
    pub team_id: u64,
    pub user_id: u64,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TraitRow {
    pub user_id: u64,
    pub category: String,
    pub value: String,
}

pub(crate) fn parse_rows<R, T>(reader: R) -> Result<Vec<T>, csv::Error>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<T>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
