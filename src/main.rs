use click_chess::GameConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Click Chess - terminal");
    click_chess::mock::run_interactive_terminal(GameConfig::default());
}
