use log::{debug, info};
use strtable::{StrSet, describe_lookup};

fn main() {
    env_logger::builder().init();

    let mut set = StrSet::new();
    set.insert("apples");
    debug!(
        "{} item(s) in {} slots, load factor {:.2}",
        set.len(),
        set.capacity(),
        set.load_factor()
    );

    println!("{}", describe_lookup(&set, "apples"));
    println!("{}", describe_lookup(&set, "sdf"));

    set.delete("apples");
    info!("deleted \"apples\"");

    println!("{}", describe_lookup(&set, "apples"));
}
