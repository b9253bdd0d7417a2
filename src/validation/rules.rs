use super::ValidationErrors;

pub(super) fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(field, "is required");
        return false;
    }
    true
}

pub(super) fn min_chars(errors: &mut ValidationErrors, field: &'static str, value: &str, min: usize) {
    if !required(errors, field, value) {
        return;
    }
    if value.trim().chars().count() < min {
        errors.push(field, format!("must be at least {min} characters"));
    }
}

pub(super) fn positive(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(field, "must be greater than 0");
    }
}

pub(super) fn email(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if !required(errors, field, value) {
        return;
    }
    if !looks_like_email(value.trim()) {
        errors.push(field, "must be a valid email address");
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.ends_with('.'),
        None => false,
    }
}
