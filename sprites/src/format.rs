use std::fmt;

/// GL texture format tags found in sprite headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Rgb,
    Rgba,
    Rgb5A1Ext,
    Argb1555Rev,
    Unknown(i32),
}

const KNOWN: [(i32, Format, &str); 4] = [
    (0x1907, Format::Rgb,         "GL_RGB"),
    (0x1908, Format::Rgba,        "GL_RGBA"),
    (0x8057, Format::Rgb5A1Ext,   "GL_RGB5_A1_EXT"),
    (0x8366, Format::Argb1555Rev, "GL_UNSIGNED_SHORT_1_5_5_5_REV"),
];

impl Format {
    pub fn from_tag(tag: i32) -> Format {
        KNOWN.iter()
            .find(|&&(t, _, _)| t == tag)
            .map_or(Format::Unknown(tag), |&(_, format, _)| format)
    }

    pub fn tag(self) -> i32 {
        match self {
            Format::Unknown(tag) => tag,
            known => KNOWN.iter()
                .find(|&&(_, f, _)| f == known)
                .map_or(0, |&(tag, _, _)| tag),
        }
    }

    pub fn name(self) -> &'static str {
        KNOWN.iter()
            .find(|&&(_, f, _)| f == self)
            .map_or("UNKNOWN", |&(_, _, name)| name)
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Format::Unknown(_))
    }
}

impl From<i32> for Format {
    fn from(tag: i32) -> Self { Format::from_tag(tag) }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Unknown(tag) => write!(f, "UNKNOWN (0x{tag:X})"),
            known => f.write_str(known.name()),
        }
    }
}

#[cfg(test)]
#[test]
fn tags_and_names() {
    for (tag, format, name) in KNOWN {
        assert_eq!(Format::from_tag(tag), format);
        assert_eq!(format.tag(), tag);
        assert_eq!(format.name(), name);
        assert_eq!(format.to_string(), name);
        assert!(format.is_known());
    }

    let odd = Format::from_tag(0x1234);
    assert_eq!(odd, Format::Unknown(0x1234));
    assert_eq!(odd.tag(), 0x1234);
    assert_eq!(odd.name(), "UNKNOWN");
    assert_eq!(odd.to_string(), "UNKNOWN (0x1234)");
    assert!(!odd.is_known());
}
