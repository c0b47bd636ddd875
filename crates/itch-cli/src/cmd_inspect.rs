/// Implementation of `itch inspect`.
///
/// Decodes one datagram (or, with `--message`, one bare message) given as
/// hex on the command line and explains what the splitter and decoder
/// made of it.
///
/// # Output format
///
/// ```text
/// Datagram: 14 bytes
/// Frame:    declared 12, available 12, trailing 0
/// Type:     System Event ('S'), minimum 12 bytes
/// Record:   System Event - Time: 00:00:00.000, Event: A
/// ```
use anyhow::{Context, Result};
use itch_decoder::{DatagramOutcome, DecodeOutcome, ItchDecoder};
use itch_driver::{JsonRenderer, TextRenderer};
use itch_types::MessageType;

use crate::InspectArgs;

/// Run the `itch inspect` command.
///
/// # Errors
///
/// Returns an error if the input is not valid hex.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    for line in describe(&bytes, args.message, args.json)? {
        println!("{line}");
    }
    Ok(())
}

fn parse_hex(parts: &[String]) -> Result<Vec<u8>> {
    let joined: String = parts
        .iter()
        .flat_map(|p| p.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    let digits = joined
        .strip_prefix("0x")
        .or_else(|| joined.strip_prefix("0X"))
        .unwrap_or(&joined);
    hex::decode(digits).with_context(|| format!("invalid hex input {joined:?}"))
}

fn describe(bytes: &[u8], bare_message: bool, json: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let outcome = if bare_message {
        lines.push(format!("Message:  {} bytes", bytes.len()));
        ItchDecoder::classify(bytes)
    } else {
        lines.push(format!("Datagram: {} bytes", bytes.len()));
        match ItchDecoder::decode_datagram(bytes) {
            DatagramOutcome::NoFrame => {
                lines.push("Frame:    none (fewer than 2 bytes)".to_string());
                return Ok(lines);
            }
            DatagramOutcome::Incomplete {
                declared_length,
                available_length,
            } => {
                lines.push(format!(
                    "Frame:    incomplete, declared {declared_length}, available {available_length}"
                ));
                return Ok(lines);
            }
            DatagramOutcome::Frame {
                declared_length,
                trailing_len,
                outcome,
            } => {
                lines.push(format!(
                    "Frame:    declared {declared_length}, available {}, trailing {trailing_len}",
                    usize::from(declared_length) + trailing_len
                ));
                outcome
            }
        }
    };

    match outcome {
        DecodeOutcome::Empty => lines.push("Type:     none (empty message)".to_string()),
        DecodeOutcome::Truncated {
            message_type,
            length,
            required,
        } => {
            lines.push(type_line(message_type));
            lines.push(format!(
                "Record:   none, truncated ({length} of {required} bytes)"
            ));
        }
        DecodeOutcome::Record(record) => {
            lines.push(type_line(record.message_type()));
            let rendered = if json {
                JsonRenderer::render(&record)?
            } else {
                TextRenderer::render(&record)
            };
            lines.push(format!("Record:   {rendered}"));
        }
    }

    Ok(lines)
}

fn type_line(message_type: MessageType) -> String {
    let tag = char::from(message_type.wire_id());
    match message_type.min_len() {
        Some(min) => format!(
            "Type:     {} ('{tag}'), minimum {min} bytes",
            message_type.name()
        ),
        None => format!("Type:     {} ('{tag}')", message_type.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_args(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn system_event_datagram() {
        let bytes = parse_hex(&hex_args("000C 5300000000 000000 0003E8 41")).unwrap();
        assert_eq!(
            describe(&bytes, false, false).unwrap(),
            vec![
                "Datagram: 14 bytes",
                "Frame:    declared 12, available 12, trailing 0",
                "Type:     System Event ('S'), minimum 12 bytes",
                "Record:   System Event - Time: 00:00:00.000, Event: A",
            ]
        );
    }

    #[test]
    fn bare_unknown_message() {
        let bytes = parse_hex(&hex_args("0x5a0102")).unwrap();
        assert_eq!(
            describe(&bytes, true, false).unwrap(),
            vec![
                "Message:  3 bytes",
                "Type:     Unknown ('Z')",
                "Record:   Unknown message type: Z (length: 3)",
            ]
        );
    }

    #[test]
    fn incomplete_datagram() {
        let bytes = parse_hex(&hex_args("0024 41 00")).unwrap();
        assert_eq!(
            describe(&bytes, false, false).unwrap()[1],
            "Frame:    incomplete, declared 36, available 2"
        );
    }

    #[test]
    fn truncated_known_message() {
        let bytes = parse_hex(&hex_args("0003 440000")).unwrap();
        let lines = describe(&bytes, false, false).unwrap();
        assert_eq!(lines[2], "Type:     Delete Order ('D'), minimum 19 bytes");
        assert_eq!(lines[3], "Record:   none, truncated (3 of 19 bytes)");
    }

    #[test]
    fn bad_hex_is_an_error() {
        assert!(parse_hex(&hex_args("zz")).is_err());
    }
}
