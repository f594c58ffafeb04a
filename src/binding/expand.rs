use super::ParamValue;
use crate::errors::SpotifyError;

/// Joins a list argument with `,`, in order and without deduplication.
///
/// Percent-encoding is left to URL assembly, so `["a", "b"]` expands to the
/// literal `a,b` and only later becomes `a%2Cb` on the wire.
///
/// # Errors
///
/// [`SpotifyError::InvalidArgument`] for an empty list or a scalar.
pub fn expand_comma_joined(value: &ParamValue) -> Result<String, SpotifyError> {
    match value {
        ParamValue::List(items) if items.is_empty() => Err(SpotifyError::InvalidArgument(
            "value must not be empty".to_string(),
        )),
        ParamValue::List(items) => Ok(items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")),
        ParamValue::Scalar(_) => Err(SpotifyError::InvalidArgument(
            "value must be a list".to_string(),
        )),
    }
}

/// Wire string for one slot: through the expander if it has one, otherwise
/// the scalar's display form.
pub(super) fn render_value(
    slot_name: &str,
    expander: Option<super::Expander>,
    value: &ParamValue,
) -> Result<String, SpotifyError> {
    let rendered = match (expander, value) {
        (Some(expand), value) => expand(value),
        (None, ParamValue::Scalar(scalar)) => Ok(scalar.to_string()),
        (None, ParamValue::List(_)) => Err(SpotifyError::InvalidArgument(
            "list given for a single-valued parameter".to_string(),
        )),
    };
    rendered.map_err(|err| match err {
        SpotifyError::InvalidArgument(detail) => {
            SpotifyError::InvalidArgument(format!("`{slot_name}`: {detail}"))
        }
        other => other,
    })
}
