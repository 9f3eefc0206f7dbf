fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();
    rfyy::run_with_args(std::env::args_os())
}
