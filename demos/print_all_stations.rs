use dwd_klima::{Dwd, DwdError};

fn main() -> Result<(), DwdError> {
    let client = Dwd::new()?;

    for record in client.collect_all_stations()? {
        println!("{}", record);
    }
    Ok(())
}
