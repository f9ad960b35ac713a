use roman_calculator_rs::run;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Ошибка ввода-вывода: {e}");
        std::process::exit(1);
    }
}
