//! 局部更新值
//!
//! `Patch::Unchanged` 表示请求未携带该字段；`Patch::Set` 表示显式赋值。
//! 对可空字段使用 `Patch<Option<T>>`，JSON 中的 `null` 会解析为 `Set(None)`（清空）。

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unchanged => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Set(value) => Patch::Set(f(value)),
            Patch::Unchanged => Patch::Unchanged,
        }
    }

    /// 将已设置的值写入目标字段，返回是否发生写入
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Patch::Set(value) => {
                *target = value;
                true
            }
            Patch::Unchanged => false,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 字段缺失时由 #[serde(default)] 给出 Unchanged；出现即视为赋值
        T::deserialize(deserializer).map(Patch::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct TitlePatch {
        #[serde(default)]
        title: Patch<String>,
        #[serde(default)]
        description: Patch<Option<String>>,
    }

    #[test]
    fn test_missing_field_is_unchanged() {
        let patch: TitlePatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.title, Patch::Unchanged);
        assert_eq!(patch.description, Patch::Unchanged);
    }

    #[test]
    fn test_null_clears_optional_field() {
        let patch: TitlePatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Patch::Set(None));
        assert!(!patch.title.is_set());
    }

    #[test]
    fn test_apply_to_writes_only_when_set() {
        let mut title = "Old".to_string();
        assert!(!Patch::Unchanged.apply_to(&mut title));
        assert_eq!(title, "Old");
        assert!(Patch::Set("New".to_string()).apply_to(&mut title));
        assert_eq!(title, "New");
    }

    #[test]
    fn test_map_keeps_unchanged() {
        let trimmed = Patch::Set("  Intro  ".to_string()).map(|v| v.trim().to_string());
        assert_eq!(trimmed, Patch::Set("Intro".to_string()));
        assert_eq!(Patch::<String>::Unchanged.map(|v| v.len()), Patch::Unchanged);
    }
}
