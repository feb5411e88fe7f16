use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};

pub fn print_store_info(store: &SessionStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) LOCATION
    //
    println!("{}• Store:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!(
        "{}• Scope:{} current session only (wiped at every start)",
        CYAN, RESET
    );

    //
    // 2) TOTAL ENTRIES
    //
    let count = store.count()?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let (fmt_first, fmt_last) = match store.date_bounds()? {
        Some((first, last)) => (first, last),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) HABITS
    //
    let habits = store.habits()?;
    println!("{}• Habits:{} {}", CYAN, RESET, habits.len());

    println!();
    Ok(())
}
