mod launch;

fn main() -> std::process::ExitCode {
    launch::launch("servicio", server::run)
}
