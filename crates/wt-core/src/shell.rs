//! Shell integration
//!
//! A child process cannot change its parent shell's directory, so `wt` prints
//! a sentinel line on stdout and a small wrapper function installed in the
//! user's shell performs the `cd`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::WtError;

/// Stdout prefix that tells the shell wrapper to change directory
pub const CD_SENTINEL: &str = "__wt_cd:";

const BASH_ZSH_SNIPPET: &str = r#"wt() {
  local output
  output=$(command wt "$@")
  local exit_code=$?
  if [[ "$output" == __wt_cd:* ]]; then
    cd "${output#__wt_cd:}"
  elif [[ -n "$output" ]]; then
    echo "$output"
  fi
  return $exit_code
}
"#;

const FISH_SNIPPET: &str = r#"function wt
  set -l output (command wt $argv)
  set -l exit_code $status
  if string match -q '__wt_cd:*' $output
    cd (string replace '__wt_cd:' '' $output)
  else if test -n "$output"
    printf '%s\n' $output
  end
  return $exit_code
end
"#;

/// Shells with an integration snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = WtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            other => Err(WtError::UnsupportedShell {
                shell: other.to_string(),
            }),
        }
    }
}

/// Wrapper function to `eval` in the user's shell rc file
pub fn init_snippet(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash | Shell::Zsh => BASH_ZSH_SNIPPET,
        Shell::Fish => FISH_SNIPPET,
    }
}

/// The stdout line that makes the wrapper `cd` into `path`
pub fn cd_directive(path: &Path) -> String {
    format!("{}{}", CD_SENTINEL, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_shells() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!("fish".parse::<Shell>().unwrap(), Shell::Fish);
    }

    #[test]
    fn test_parse_unsupported_shell() {
        let err = "powershell".parse::<Shell>().unwrap_err();
        assert!(matches!(err, WtError::UnsupportedShell { ref shell } if shell == "powershell"));
        assert!(err.to_string().contains("bash, zsh, fish"));
    }

    #[test]
    fn test_bash_and_zsh_share_snippet() {
        assert_eq!(init_snippet(Shell::Bash), init_snippet(Shell::Zsh));
        let snippet = init_snippet(Shell::Bash);
        assert!(snippet.starts_with("wt() {"));
        assert!(snippet.contains("command wt \"$@\""));
        assert!(snippet.contains(CD_SENTINEL));
        assert!(snippet.contains("return $exit_code"));
    }

    #[test]
    fn test_fish_snippet() {
        let snippet = init_snippet(Shell::Fish);
        assert!(snippet.starts_with("function wt"));
        assert!(snippet.contains("command wt $argv"));
        assert!(snippet.contains(CD_SENTINEL));
        assert!(snippet.trim_end().ends_with("end"));
    }

    #[test]
    fn test_cd_directive() {
        assert_eq!(
            cd_directive(Path::new("/tmp/repo-worktrees/feature-x")),
            "__wt_cd:/tmp/repo-worktrees/feature-x"
        );
    }

    #[test]
    fn test_display_roundtrips_name() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert_eq!(shell.to_string().parse::<Shell>().unwrap(), shell);
        }
    }
}
