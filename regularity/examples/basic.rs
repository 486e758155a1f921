use regularity::{Error, Regularity};

fn main() -> Result<(), Error> {
    let re = Regularity::new()
        .start_with((3, "digits"))?
        .then("-")?
        .then((4, "digits"))?
        .done()?;
    println!("{re}");
    assert!(re.is_match("555-1234"));

    let re = Regularity::new()
        .one_of(["cat", "dog"])?
        .maybe("s")?
        .insensitive()?
        .global()?
        .done()?;
    println!("{re}");
    let pets: Vec<&str> = re.find_all("Cats and a DOG").map(|m| m.as_str()).collect();
    assert_eq!(pets, ["Cats", "DOG"]);

    // Anchors are placed at the start and end no matter the order
    let re = Regularity::new()
        .end_with("!")?
        .at_least(2, "letters")?
        .start_with("whitespace")?
        .done()?;
    assert_eq!(re.source(), r"^\s(?:[A-Za-z]){2,}!$");
    Ok(())
}
