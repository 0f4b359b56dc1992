use chrono::Local;
use daytime::{Interval, Time, Unit};

fn main() {
    let now = Time::from_datetime(&Local::now());
    let next_slot = now.ceiling(Interval::Quarter);

    println!("now:       {now}");
    println!("next slot: {}", next_slot.format("hh:mm aa"));
    println!("in 90 min: {}", now.add(Unit::Minutes, 90));

    match Time::range(Interval::Hour, 2, now, Time::MAX) {
        Ok(slots) => {
            for slot in slots {
                println!("  {}", slot.format("HH:mm"));
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}
