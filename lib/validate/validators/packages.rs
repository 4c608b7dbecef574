//! Package and argument validation.

use crate::model::{Argument, ArgumentType, Package};

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};
use super::transport::validate_package_transport;
use super::version::validate_version;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Characters that show a placeholder or value was pasted into a flag name.
const INVALID_NAME_CHARS: &[char] = &['<', '>', ' ', '$'];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate one package entry.
pub fn validate_package(package: &Package, index: usize) -> ValidationResult {
    let location = format!("packages[{}]", index);

    if package.identifier.chars().any(char::is_whitespace) {
        return Err(ValidationIssue::new(
            ErrorCode::PackageIdentifierHasSpaces,
            format!("{}.identifier", location),
            format!("package identifier `{}` cannot contain spaces", package.identifier),
        ));
    }

    validate_version(&package.version).map_err(|issue| issue.within(&location))?;

    for (i, arg) in package.runtime_arguments.iter().enumerate() {
        validate_argument(arg).map_err(|issue| {
            issue.within(&format!("{}.runtimeArguments[{}]", location, i))
        })?;
    }

    for (i, arg) in package.package_arguments.iter().enumerate() {
        validate_argument(arg).map_err(|issue| {
            issue.within(&format!("{}.packageArguments[{}]", location, i))
        })?;
    }

    let available_variables = collect_available_variables(package);
    validate_package_transport(&package.transport, &available_variables)
        .map_err(|issue| issue.within(&location))
}

/// Validate one argument. Only named arguments carry checkable fields.
pub fn validate_argument(arg: &Argument) -> ValidationResult {
    if arg.kind() != Some(ArgumentType::Named) {
        return Ok(());
    }

    validate_named_argument_name(&arg.name)?;
    validate_argument_value_fields(&arg.name, &arg.value, &arg.default)
}

/// Validate a named argument's flag name.
///
/// Valid: `--directory`, `--port`, `-v`, `config`.
/// Invalid: `--directory <path>`, `--port 8080`, `$PORT`.
pub fn validate_named_argument_name(name: &str) -> ValidationResult {
    if name.is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::ArgumentNameRequired,
            "name",
            "named argument name is required",
        ));
    }

    if name.contains(INVALID_NAME_CHARS) {
        return Err(ValidationIssue::new(
            ErrorCode::ArgumentInvalidCharacters,
            "name",
            format!("invalid named argument name: {}", name),
        )
        .with_help("use the bare flag (e.g. --port) and put the value in `value` or `default`"));
    }

    Ok(())
}

/// Reject values that repeat the flag name (`--port` / `--port 8080`).
pub fn validate_argument_value_fields(name: &str, value: &str, default: &str) -> ValidationResult {
    if !value.is_empty() && value.starts_with(name) {
        return Err(ValidationIssue::new(
            ErrorCode::ArgumentValueStartsWithName,
            "value",
            format!("value starts with argument name '{}': {}", name, value),
        ));
    }

    if !default.is_empty() && default.starts_with(name) {
        return Err(ValidationIssue::new(
            ErrorCode::ArgumentValueStartsWithName,
            "default",
            format!("default starts with argument name '{}': {}", name, default),
        ));
    }

    Ok(())
}

/// Names a package transport URL may reference as `{name}`: environment
/// variable names plus argument names and value hints.
pub fn collect_available_variables(package: &Package) -> Vec<String> {
    let mut variables: Vec<String> = package
        .environment_variables
        .iter()
        .map(|env| env.name.clone())
        .collect();

    for arg in package
        .runtime_arguments
        .iter()
        .chain(package.package_arguments.iter())
    {
        if !arg.name.is_empty() {
            variables.push(arg.name.clone());
        }
        if !arg.value_hint.is_empty() {
            variables.push(arg.value_hint.clone());
        }
    }

    variables
}
