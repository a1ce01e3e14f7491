use std::process;

fn main() {
    match folder_toc_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("update-folder-toc error: {err}");
            process::exit(folder_toc_cli::exit_code_for(&err) as i32);
        }
    }
}
