//! Form definitions: the choices offered by the venue, artist and show forms,
//! and the explicit mapping from a submitted form to the row that gets written.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use entities::artist;
use entities::artist_local_model::ArtistModel;
use entities::venue;
use entities::venue_local_model::VenueModel;
use thiserror::Error;

use crate::date_format::parse_datetime;

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RhythmAndBlues,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 19] = [
        Genre::Alternative,
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::Funk,
        Genre::HipHop,
        Genre::HeavyMetal,
        Genre::Instrumental,
        Genre::Jazz,
        Genre::MusicalTheatre,
        Genre::Pop,
        Genre::Punk,
        Genre::RhythmAndBlues,
        Genre::Reggae,
        Genre::RockNRoll,
        Genre::Soul,
        Genre::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::Folk => "Folk",
            Genre::Funk => "Funk",
            Genre::HipHop => "Hip-Hop",
            Genre::HeavyMetal => "Heavy Metal",
            Genre::Instrumental => "Instrumental",
            Genre::Jazz => "Jazz",
            Genre::MusicalTheatre => "Musical Theatre",
            Genre::Pop => "Pop",
            Genre::Punk => "Punk",
            Genre::RhythmAndBlues => "R&B",
            Genre::Reggae => "Reggae",
            Genre::RockNRoll => "Rock n Roll",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| FormError::Invalid {
                field: "genres",
                value: s.to_string(),
            })
    }
}

/// Genres are kept in a single text column, comma separated.
pub fn join_genres(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<&str>>()
        .join(",")
}

pub fn split_genres(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("The {0} field is required.")]
    Missing(&'static str),
    #[error("'{value}' is not a valid choice for {field}.")]
    Invalid { field: &'static str, value: String },
}

/// A url-encoded form body, repeated keys included.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        FormData { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn required(&self, key: &'static str) -> Result<String, FormError> {
        match self.get(key).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(FormError::Missing(key)),
        }
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// A checkbox is ticked when the browser sent it with a truthy value. An
    /// unticked checkbox is simply absent from the body.
    pub fn checkbox(&self, key: &str) -> bool {
        match self.get(key) {
            Some(value) => {
                let value = value.trim();
                value.eq_ignore_ascii_case("y")
                    || value.eq_ignore_ascii_case("on")
                    || value.eq_ignore_ascii_case("true")
            }
            None => false,
        }
    }

    pub fn state(&self) -> Result<String, FormError> {
        let state = self.required("state")?.to_uppercase();
        if STATES.contains(&state.as_str()) {
            Ok(state)
        } else {
            Err(FormError::Invalid {
                field: "state",
                value: state,
            })
        }
    }

    pub fn genres(&self) -> Result<Vec<Genre>, FormError> {
        self.get_all("genres")
            .into_iter()
            .map(|value| value.trim().parse::<Genre>())
            .collect()
    }

    /// The submitted name, for flash messages. Blank when missing.
    pub fn name(&self) -> String {
        self.get("name").unwrap_or_default().trim().to_string()
    }
}

pub fn parse_venue(form: &FormData) -> Result<VenueModel, FormError> {
    Ok(VenueModel {
        name: form.required("name")?,
        city: form.required("city")?,
        state: form.state()?,
        address: form.required("address")?,
        phone: form.optional("phone"),
        genres: join_genres(&form.genres()?),
        website: form.optional("website"),
        image_link: form.optional("image_link"),
        facebook_link: form.optional("facebook_link"),
        seeking_talent: form.checkbox("seeking_talent"),
        seeking_description: form.optional("seeking_description"),
    })
}

pub fn parse_artist(form: &FormData) -> Result<ArtistModel, FormError> {
    Ok(ArtistModel {
        name: form.required("name")?,
        city: form.required("city")?,
        state: form.state()?,
        phone: form.optional("phone"),
        genres: join_genres(&form.genres()?),
        image_link: form.optional("image_link"),
        website: form.optional("website"),
        facebook_link: form.optional("facebook_link"),
        seeking_venue: form.checkbox("seeking_venue"),
        seeking_description: form.optional("seeking_description"),
    })
}

/// A show submission before the referenced artist and venue are looked up.
/// Ids that do not parse are `None` and are reported as not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSubmission {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub start_time: NaiveDateTime,
}

pub fn parse_show(form: &FormData) -> Result<ShowSubmission, FormError> {
    let raw_start = form.required("start_time")?;
    let start_time = parse_datetime(&raw_start).ok_or(FormError::Invalid {
        field: "start_time",
        value: raw_start,
    })?;
    Ok(ShowSubmission {
        artist_id: form.get("artist_id").and_then(|id| id.trim().parse().ok()),
        venue_id: form.get("venue_id").and_then(|id| id.trim().parse().ok()),
        start_time,
    })
}

/// Pre-filled values for the venue form.
pub fn venue_values(venue: &venue::Model) -> FormData {
    let mut fields = vec![
        ("name".to_string(), venue.name.to_owned()),
        ("city".to_string(), venue.city.to_owned()),
        ("state".to_string(), venue.state.to_owned()),
        ("address".to_string(), venue.address.to_owned()),
    ];
    push_optional(&mut fields, "phone", &venue.phone);
    push_optional(&mut fields, "website", &venue.website);
    push_optional(&mut fields, "image_link", &venue.image_link);
    push_optional(&mut fields, "facebook_link", &venue.facebook_link);
    push_optional(&mut fields, "seeking_description", &venue.seeking_description);
    for genre in split_genres(&venue.genres) {
        fields.push(("genres".to_string(), genre));
    }
    if venue.seeking_talent {
        fields.push(("seeking_talent".to_string(), "y".to_string()));
    }
    FormData::new(fields)
}

/// Pre-filled values for the artist form.
pub fn artist_values(artist: &artist::Model) -> FormData {
    let mut fields = vec![
        ("name".to_string(), artist.name.to_owned()),
        ("city".to_string(), artist.city.to_owned()),
        ("state".to_string(), artist.state.to_owned()),
    ];
    push_optional(&mut fields, "phone", &artist.phone);
    push_optional(&mut fields, "website", &artist.website);
    push_optional(&mut fields, "image_link", &artist.image_link);
    push_optional(&mut fields, "facebook_link", &artist.facebook_link);
    push_optional(&mut fields, "seeking_description", &artist.seeking_description);
    for genre in split_genres(&artist.genres) {
        fields.push(("genres".to_string(), genre));
    }
    if artist.seeking_venue {
        fields.push(("seeking_venue".to_string(), "y".to_string()));
    }
    FormData::new(fields)
}

fn push_optional(fields: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        fields.push((key.to_string(), value.to_owned()));
    }
}
