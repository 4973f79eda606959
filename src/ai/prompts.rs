//! Fixed system instructions for the reflection generator.
//!
//! The product speaks Portuguese, so the instructions pin the response
//! language; the entry text itself is passed through untouched.

/// System instruction for generating a reflection on a journal entry.
pub const REFLECTION_INSTRUCTION: &str = "Você é um assistente gentil e inspirador. \
Com base na entrada do diário de gratidão do usuário, escreva um pensamento, citação \
ou reflexão curta, edificante e positiva. Mantenha-a com uma ou duas frases. \
Responda em português.";

/// System instruction for the daily quote.
pub const DAILY_QUOTE_INSTRUCTION: &str = "Você é um gerador de citações inspiradoras. \
Forneça uma citação curta e impactante sobre gratidão. Apenas a citação, sem texto \
introdutório. Responda em português.";

/// User content sent with the daily quote request.
pub const DAILY_QUOTE_REQUEST: &str = "Gerar uma citação sobre gratidão.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_pin_portuguese() {
        assert!(REFLECTION_INSTRUCTION.contains("português"));
        assert!(DAILY_QUOTE_INSTRUCTION.contains("português"));
    }

    #[test]
    fn test_quote_instruction_wants_bare_quote() {
        assert!(DAILY_QUOTE_INSTRUCTION.contains("sem texto"));
    }
}
