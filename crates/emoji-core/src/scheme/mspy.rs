use super::{Layout, MissingKey, SchemeEncoder};

/// Microsoft shuangpin.
///
/// Zero-initial syllables are typed with a leading "o".
pub struct Microsoft;

impl SchemeEncoder for Microsoft {
    fn encode_initial(&self, initial: &str, layout: &Layout) -> Result<String, MissingKey> {
        super::encode_initial_common(initial, layout)
    }

    fn encode_final(
        &self,
        final_part: &str,
        bare: bool,
        layout: &Layout,
    ) -> Result<String, MissingKey> {
        if bare {
            return match final_part {
                "er" => Ok("or".to_string()),
                "e" | "o" | "a" => Ok(format!("o{final_part}")),
                _ => Ok(format!("o{}", layout.key(final_part)?)),
            };
        }
        if matches!(final_part, "e" | "u" | "i" | "o" | "a") {
            return Ok(final_part.to_string());
        }
        layout.key(final_part).map(str::to_string)
    }
}
