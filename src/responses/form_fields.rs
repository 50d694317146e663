use crate::forms::{FormData, Genre, STATES};
use crate::responses::layout::escape;

pub fn text_input(values: &FormData, name: &str, label: &str) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" value="{value}"></label>"#,
        label = escape(label),
        name = name,
        value = escape(values.get(name).unwrap_or_default()),
    )
}

pub fn datetime_input(values: &FormData, name: &str, label: &str) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" placeholder="YYYY-MM-DD HH:MM:SS" value="{value}"></label>"#,
        label = escape(label),
        name = name,
        value = escape(values.get(name).unwrap_or_default()),
    )
}

pub fn state_select(values: &FormData) -> String {
    let selected = values.get("state").unwrap_or_default().to_uppercase();
    let options: String = STATES
        .iter()
        .map(|state| {
            let marker = if selected == *state { " selected" } else { "" };
            format!(r#"<option value="{state}"{marker}>{state}</option>"#)
        })
        .collect();
    format!(r#"<label>State <select name="state">{}</select></label>"#, options)
}

pub fn genre_select(values: &FormData) -> String {
    let selected = values.get_all("genres");
    let options: String = Genre::ALL
        .iter()
        .map(|genre| {
            let marker = if selected.contains(&genre.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(genre.as_str()),
            )
        })
        .collect();
    format!(
        r#"<label>Genres <select name="genres" multiple>{}</select></label>"#,
        options
    )
}

pub fn checkbox(values: &FormData, name: &str, label: &str) -> String {
    let marker = if values.checkbox(name) { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>"#,
        name = name,
        marker = marker,
        label = escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_selected_choices() {
        let values = FormData::new(vec![
            ("state".to_string(), "ny".to_string()),
            ("genres".to_string(), "R&B".to_string()),
            ("seeking_venue".to_string(), "y".to_string()),
        ]);
        assert!(state_select(&values).contains(r#"<option value="NY" selected>NY</option>"#));
        assert!(genre_select(&values)
            .contains(r#"<option value="R&amp;B" selected>R&amp;B</option>"#));
        assert!(checkbox(&values, "seeking_venue", "Seeking venue").contains(" checked"));
        assert!(!checkbox(&values, "seeking_talent", "Seeking talent").contains(" checked"));
    }
}
