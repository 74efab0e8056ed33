//! `#EXTM3U` header attributes

use super::attributes::AttributeScanner;

pub const EXTM3U: &[u8] = b"#EXTM3U";

/// Playlist-wide values declared on the header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderAttributes {
    /// `name`, first occurrence wins
    pub title: Option<String>,

    /// `type`, last occurrence wins
    pub default_type: Option<String>,

    /// `dlna_extras`, last occurrence wins
    pub default_dlna_extras: Option<String>,
}

/// Parse the header if `line` starts with the `#EXTM3U` marker
pub fn parse_header(line: &[u8]) -> Option<HeaderAttributes> {
    let rest = line.strip_prefix(EXTM3U)?;
    let skip = rest.iter().take_while(|&&b| b == b' ').count();

    let mut header = HeaderAttributes::default();
    for attr in AttributeScanner::new(&rest[skip..]) {
        let value = String::from_utf8_lossy(attr.value).into_owned();
        match attr.name {
            b"name" => {
                if header.title.is_none() {
                    header.title = Some(value);
                }
            }
            b"type" => header.default_type = Some(value),
            b"dlna_extras" => header.default_dlna_extras = Some(value),
            b"logo" => log::debug!("Ignoring playlist logo: {}", value),
            _ => {}
        }
    }

    Some(header)
}
