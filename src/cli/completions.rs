use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    scriptpack completions bash > ~/.bash_completion.d/scriptpack\n\n\
                  Generate zsh completions:\n    scriptpack completions zsh > ~/.zfunc/_scriptpack\n\n\
                  Generate fish completions:\n    scriptpack completions fish > ~/.config/fish/completions/scriptpack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
