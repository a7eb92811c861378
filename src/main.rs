use chessboard_rules::config::RuleSet;
use chessboard_rules::mock::run_interactive_terminal;

fn main() {
    env_logger::init();

    let rules = match RuleSet::from_env() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    log::info!("Chessboard rules, castling revocation: {:?}", rules.revocation);

    if let Err(e) = run_interactive_terminal(rules) {
        eprintln!("Terminal failed: {e}");
        std::process::exit(1);
    }
}
