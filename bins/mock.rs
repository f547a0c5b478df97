mod launch;

fn main() -> std::process::ExitCode {
    launch::launch("mock", server::run_mock)
}
