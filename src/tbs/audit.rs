use crate::BankResult;

/// Runs `operation` and logs how it went. The result is returned untouched.
pub fn logged<T>(name: &str, operation: impl FnOnce() -> BankResult<T>) -> BankResult<T> {
    let result = operation();

    match &result {
        Ok(_) => log::info!("{} completed", name.to_uppercase()),
        Err(e) => log::warn!("{} rejected: {e}", name.to_uppercase()),
    }

    return result;
}
