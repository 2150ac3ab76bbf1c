use std::env;
mod btm;
mod cow;
mod utils;

fn usage() {
    println!("usage: <cow|btm> <size>")
}

fn main() {
    let args = env::args().collect::<Vec<_>>();
    if args.len() != 3 {
        return usage();
    }
    let size = match args[2].parse::<usize>() {
        Ok(size) => size,
        Err(_) => return usage(),
    };
    match args[1].as_ref() {
        "cow" => cow::run(size),
        "btm" => btm::run(size),
        _ => usage(),
    }
}
