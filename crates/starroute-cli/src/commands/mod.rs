// Handlers for the CLI subcommands. `main.rs` parses arguments and
// dispatches here.

pub mod anchors;
pub mod range;
pub mod route;

/// Friendly message for a name the catalog does not know.
pub(crate) fn format_unknown_system_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown system '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

/// Friendly message for an empty search, pointing at the jump range.
pub(crate) fn format_route_not_found_message(
    start: &str,
    goal: &str,
    range: f64,
    direct: bool,
) -> String {
    let mut message = format!(
        "No route found between {} and {} with a {} ly jump range.",
        start, goal, range
    );
    message.push_str(" Try increasing --range");
    if direct {
        message.push_str(" or omit --direct to route through anchors");
    }
    message.push('.');
    message
}

/// Map library errors to messages meant for a terminal.
pub(crate) fn describe_error(err: starroute_lib::Error) -> anyhow::Error {
    match err {
        starroute_lib::Error::UnknownSystem { name, suggestions } => {
            anyhow::anyhow!(format_unknown_system_message(&name, &suggestions))
        }
        starroute_lib::Error::RouteNotFound {
            start,
            goal,
            max_jump_range,
        } => anyhow::anyhow!(format_route_not_found_message(
            &start,
            &goal,
            max_jump_range,
            false
        )),
        other => anyhow::Error::new(other),
    }
}
