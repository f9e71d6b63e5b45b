use super::{Layout, MissingKey, SchemeEncoder};

/// Xiaohe (Flying Crane) shuangpin.
///
/// Zero-initial syllables are typed with the final's first letter.
pub struct Xiaohe;

impl SchemeEncoder for Xiaohe {
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
            // a -> aa, ai -> ai, ang -> ah
            return match final_part.len() {
                1 if matches!(final_part, "e" | "u" | "i" | "o" | "a") => {
                    Ok(final_part.repeat(2))
                }
                2 => Ok(final_part.to_string()),
                _ => {
                    let key = layout.key(final_part)?;
                    Ok(format!("{}{key}", &final_part[..1]))
                }
            };
        }
        if final_part.len() == 1 {
            return Ok(final_part.to_string());
        }
        layout.key(final_part).map(str::to_string)
    }
}
