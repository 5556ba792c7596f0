/// Voice of a greeting-card message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Emotional,
    Funny,
    Formal,
}

impl Tone {
    /// Japanese description used inside the prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Tone::Emotional => "感動的で心温まる",
            Tone::Funny => "ユーモアのある楽しい",
            Tone::Formal => "丁寧でフォーマルな",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Emotional => write!(f, "emotional"),
            Tone::Funny => write!(f, "funny"),
            Tone::Formal => write!(f, "formal"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emotional" => Ok(Tone::Emotional),
            "funny" => Ok(Tone::Funny),
            "formal" => Ok(Tone::Formal),
            _ => Err(format!("Invalid tone: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageRequest {
    pub tone: Tone,
    pub relationship: String,
    pub occasion: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageResult {
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_tones() {
        assert_eq!("emotional".parse::<Tone>(), Ok(Tone::Emotional));
        assert_eq!("funny".parse::<Tone>(), Ok(Tone::Funny));
        assert_eq!("formal".parse::<Tone>(), Ok(Tone::Formal));
    }

    #[test]
    fn should_reject_unknown_tone() {
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn should_round_trip_display() {
        for tone in [Tone::Emotional, Tone::Funny, Tone::Formal] {
            assert_eq!(tone.to_string().parse::<Tone>(), Ok(tone));
        }
    }

    #[test]
    fn should_default_to_emotional() {
        assert_eq!(Tone::default(), Tone::Emotional);
    }
}
