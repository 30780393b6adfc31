//! Rule-to-command compilation
//!
//! Maps a [`Rule`] and an [`Operation`] to the exact `netsh advfirewall`
//! command line. The templates are reproduced bit-for-bit from the
//! command syntax netsh expects; any drift here breaks both the emitted
//! scripts and the live verification pass, which re-derives show-commands
//! through the same function.

use crate::core::rules::Rule;

/// The native firewall-control invocation token prefixing every command
pub const NETSH_PREFIX: &str = "netsh advfirewall firewall";

/// Kind of firewall operation a command performs
///
/// Determines which command template applies to a rule.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Operation {
    /// Create the rule in the live firewall
    #[strum(serialize = "add")]
    Add,
    /// Query whether the rule exists
    #[strum(serialize = "show")]
    ShowStatus,
    /// Remove the rule from the live firewall
    #[strum(serialize = "delete")]
    Delete,
}

/// A command line derived deterministically from a (rule, operation) pair
///
/// Has no identity of its own; re-compiling the same inputs always yields
/// byte-identical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCommand {
    pub operation: Operation,
    pub rule_name: String,
    pub command_line: String,
}

/// Compiles a rule into the command line for the requested operation.
///
/// Pure function over its inputs. The rule name is inserted verbatim
/// inside double quotes with no escaping; the loader guarantees names
/// contain no quote characters.
pub fn compile(rule: &Rule, operation: Operation) -> CompiledCommand {
    let command_line = match operation {
        Operation::Add => format!(
            "{NETSH_PREFIX} add rule name=\"{}\" dir=in action=allow protocol={} localport={} remoteip=any profile=any",
            rule.name, rule.protocol, rule.port
        ),
        Operation::ShowStatus => {
            format!("{NETSH_PREFIX} show rule name=\"{}\"", rule.name)
        }
        Operation::Delete => {
            format!("{NETSH_PREFIX} delete rule name=\"{}\"", rule.name)
        }
    };

    CompiledCommand {
        operation,
        rule_name: rule.name.clone(),
        command_line,
    }
}

/// Compiles every rule for one operation, preserving input order.
pub fn compile_all(rules: &[Rule], operation: Operation) -> Vec<CompiledCommand> {
    rules.iter().map(|rule| compile(rule, operation)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn http_rule() -> Rule {
        Rule {
            name: "AllowHTTP".to_string(),
            port: "80".to_string(),
            protocol: "TCP".to_string(),
        }
    }

    #[test]
    fn add_command_matches_netsh_syntax() {
        let cmd = compile(&http_rule(), Operation::Add);
        assert_eq!(
            cmd.command_line,
            "netsh advfirewall firewall add rule name=\"AllowHTTP\" dir=in action=allow protocol=TCP localport=80 remoteip=any profile=any"
        );
        assert_eq!(cmd.operation, Operation::Add);
        assert_eq!(cmd.rule_name, "AllowHTTP");
    }

    #[test]
    fn show_command_matches_netsh_syntax() {
        let cmd = compile(&http_rule(), Operation::ShowStatus);
        assert_eq!(
            cmd.command_line,
            "netsh advfirewall firewall show rule name=\"AllowHTTP\""
        );
    }

    #[test]
    fn delete_command_matches_netsh_syntax() {
        let cmd = compile(&http_rule(), Operation::Delete);
        assert_eq!(
            cmd.command_line,
            "netsh advfirewall firewall delete rule name=\"AllowHTTP\""
        );
    }

    #[test]
    fn every_operation_yields_exactly_one_command_per_rule() {
        let rules = vec![
            http_rule(),
            Rule {
                name: "AllowDNS".to_string(),
                port: "53".to_string(),
                protocol: "UDP".to_string(),
            },
        ];

        for operation in Operation::iter() {
            let commands = compile_all(&rules, operation);
            assert_eq!(commands.len(), rules.len());
            for (rule, cmd) in rules.iter().zip(&commands) {
                assert_eq!(cmd.rule_name, rule.name);
                assert_eq!(cmd.operation, operation);
            }
        }
    }

    #[test]
    fn compilation_is_deterministic() {
        let rule = http_rule();
        for operation in Operation::iter() {
            assert_eq!(compile(&rule, operation), compile(&rule, operation));
        }
    }

    #[test]
    fn raw_tokens_are_substituted_verbatim() {
        let rule = Rule {
            name: "Weird Service".to_string(),
            port: "8000-8999".to_string(),
            protocol: "udp".to_string(),
        };
        let cmd = compile(&rule, Operation::Add);
        assert!(cmd.command_line.contains("name=\"Weird Service\""));
        assert!(cmd.command_line.contains("localport=8000-8999"));
        assert!(cmd.command_line.contains("protocol=udp"));
    }

    #[test]
    fn operation_display_names() {
        assert_eq!(Operation::Add.to_string(), "add");
        assert_eq!(Operation::ShowStatus.to_string(), "show");
        assert_eq!(Operation::Delete.to_string(), "delete");
    }
}
