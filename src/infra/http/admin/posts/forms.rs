use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{IgnoredAny, MapAccess, Visitor},
};

use crate::domain::posts::PostParams;

/// The assignable post fields. Anything else in the submitted form is ignored,
/// and a repeated field keeps its last value.
#[derive(Debug, Default)]
pub(crate) struct AdminPostForm {
    pub(crate) title: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) active: Option<String>,
    pub(crate) category_id: Option<String>,
}

impl<'de> Deserialize<'de> for AdminPostForm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AdminPostFormVisitor)
    }
}

struct AdminPostFormVisitor;

impl<'de> Visitor<'de> for AdminPostFormVisitor {
    type Value = AdminPostForm;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a post form")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut form = AdminPostForm::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "title" => &mut form.title,
                "summary" => &mut form.summary,
                "body" => &mut form.body,
                "active" => &mut form.active,
                "category_id" => &mut form.category_id,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            *slot = Some(map.next_value::<String>()?);
        }
        Ok(form)
    }
}

impl From<AdminPostForm> for PostParams {
    fn from(form: AdminPostForm) -> Self {
        Self {
            title: form.title,
            summary: form.summary,
            body: form.body,
            active: form.active,
            category_id: form.category_id,
        }
    }
}
