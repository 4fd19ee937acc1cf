//! 表单字段校验
//!
//! 校验失败的消息按字段就地渲染，不会发给服务端。
//! 提交生命周期由 flows::dialog 的状态机承载。

use std::collections::BTreeMap;

use crate::utils::validate;

/// 字段规则
#[derive(Debug, Clone)]
pub enum FieldRule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Email,
    Phone,
}

/// 字段定义
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, rules: Vec<FieldRule>) -> Self {
        Self { name, label, rules }
    }

    /// 校验单个值，返回第一条失败消息
    fn check(&self, value: &str) -> Option<String> {
        let value = value.trim();
        for rule in &self.rules {
            match rule {
                FieldRule::Required => {
                    if value.is_empty() {
                        return Some(format!("{}不能为空", self.label));
                    }
                }
                // 可选字段为空时跳过格式规则
                FieldRule::MinLen(min) => {
                    if !value.is_empty() && value.chars().count() < *min {
                        return Some(format!("{}至少 {} 个字符", self.label, min));
                    }
                }
                FieldRule::MaxLen(max) => {
                    if value.chars().count() > *max {
                        return Some(format!("{}最多 {} 个字符", self.label, max));
                    }
                }
                FieldRule::Email => {
                    if !value.is_empty()
                        && let Err(message) = validate::validate_email(value)
                    {
                        return Some(message.to_string());
                    }
                }
                FieldRule::Phone => {
                    if !value.is_empty()
                        && let Err(message) = validate::validate_phone(value)
                    {
                        return Some(message.to_string());
                    }
                }
            }
        }
        None
    }
}

/// 表单定义
#[derive(Debug, Clone)]
pub struct FormDef {
    fields: Vec<FieldSpec>,
}

impl FormDef {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// 逐字段校验，返回 字段名 → 首条错误消息
    pub fn validate(&self, values: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            if let Some(message) = field.check(value) {
                errors.insert(field.name.to_string(), message);
            }
        }
        errors
    }
}

/// 用户新增/编辑表单（与后台约定：用户名 1-20 字，密码 6-20 字符）
pub fn user_form(require_password: bool) -> FormDef {
    let mut password_rules = vec![FieldRule::MinLen(6), FieldRule::MaxLen(20)];
    if require_password {
        password_rules.insert(0, FieldRule::Required);
    }
    FormDef::new(vec![
        FieldSpec::new(
            "name",
            "用户名",
            vec![FieldRule::Required, FieldRule::MaxLen(20)],
        ),
        FieldSpec::new("password", "密码", password_rules),
        FieldSpec::new("email", "邮箱", vec![FieldRule::Email]),
        FieldSpec::new("phone", "手机号", vec![FieldRule::Phone]),
    ])
}

/// 角色新增/编辑表单
pub fn role_form() -> FormDef {
    FormDef::new(vec![
        FieldSpec::new(
            "roleCode",
            "角色码",
            vec![FieldRule::Required, FieldRule::MaxLen(50)],
        ),
        FieldSpec::new(
            "roleName",
            "角色名称",
            vec![FieldRule::Required, FieldRule::MaxLen(50)],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_user_form_passes() {
        let errors = user_form(true).validate(&values(&[
            ("name", "张三"),
            ("password", "secret8"),
            ("email", "zs@example.com"),
            ("phone", "13812345678"),
        ]));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_required_and_length_messages() {
        let errors = user_form(true).validate(&values(&[("name", ""), ("password", "123")]));
        assert_eq!(errors["name"], "用户名不能为空");
        assert_eq!(errors["password"], "密码至少 6 个字符");
    }

    #[test]
    fn test_optional_fields_skip_format_rules_when_empty() {
        let errors = user_form(true).validate(&values(&[
            ("name", "张三"),
            ("password", "secret8"),
            ("email", ""),
            ("phone", ""),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_bad_email_and_phone_are_reported_per_field() {
        let errors = user_form(true).validate(&values(&[
            ("name", "张三"),
            ("password", "secret8"),
            ("email", "oops"),
            ("phone", "123"),
        ]));
        assert_eq!(errors["email"], "邮箱格式不正确");
        assert_eq!(errors["phone"], "手机号格式不正确");
    }

    #[test]
    fn test_edit_form_allows_missing_password() {
        let errors =
            user_form(false).validate(&values(&[("name", "张三"), ("password", "")]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        let long = "很".repeat(21);
        let errors = user_form(false).validate(&values(&[("name", &long)]));
        assert_eq!(errors["name"], "用户名最多 20 个字符");

        let ok = "很".repeat(20);
        let errors = user_form(false).validate(&values(&[("name", &ok)]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_role_form() {
        let errors = role_form().validate(&values(&[("roleCode", ""), ("roleName", "管理员")]));
        assert_eq!(errors["roleCode"], "角色码不能为空");
        assert!(!errors.contains_key("roleName"));
    }
}
