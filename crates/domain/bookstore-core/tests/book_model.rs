use bookstore_core::{
    format_price, Book, BookPatch, NewBook, PasswordStrength, StrengthColor, StrengthLabel,
};

fn new_book() -> NewBook {
    NewBook {
        title: "Clean Code".into(),
        author_name: "Robert C. Martin".into(),
        genre: "Programming".into(),
        price: 29.99,
        published: "2008".into(),
        isbn: "978-0132350884".into(),
        description: None,
        page_count: Some(464),
        cover_image_url: None,
    }
}

#[test]
fn book_serializes_in_camel_case_and_skips_absent_fields() {
    let book = Book::from_new("1", new_book());
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["authorName"], "Robert C. Martin");
    assert_eq!(json["pageCount"], 464);
    assert!(json.get("description").is_none());
    assert!(json.get("coverImageUrl").is_none());
}

#[test]
fn book_without_id_deserializes() {
    let book: Book = serde_json::from_str(
        r#"{"title":"T","authorName":"A","genre":"G","price":1.5,"published":"2000","isbn":"0306406152"}"#,
    )
    .unwrap();
    assert_eq!(book.id, None);
    assert_eq!(book.persisted_id(), None);
}

#[test]
fn empty_id_is_not_persisted() {
    let mut book = Book::from_new("", new_book());
    assert_eq!(book.persisted_id(), None);
    book.id = Some("3".into());
    assert_eq!(book.persisted_id(), Some("3"));
}

#[test]
fn patch_overwrites_only_set_fields() {
    let mut book = Book::from_new("1", new_book());
    book.apply_patch(BookPatch {
        price: Some(19.99),
        description: Some("Agile craftsmanship".into()),
        ..BookPatch::default()
    });
    assert_eq!(book.price, 19.99);
    assert_eq!(book.title, "Clean Code");
    assert_eq!(book.description.as_deref(), Some("Agile craftsmanship"));
    assert_eq!(book.page_count, Some(464));
    assert_eq!(book.id.as_deref(), Some("1"));
}

#[test]
fn patch_from_book_round_trips_fields() {
    let original = Book::from_new("1", new_book());
    let mut other = Book::from_new("2", NewBook {
        title: "Other".into(),
        ..new_book()
    });
    other.apply_patch(BookPatch::from(&original));
    assert_eq!(other.title, "Clean Code");
    assert_eq!(other.id.as_deref(), Some("2"));
}

#[test]
fn prices_format_as_dollars() {
    assert_eq!(format_price(29.99), "$29.99");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(1999.5), "$1,999.50");
    assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
}

#[test]
fn strong_password_scores_full_marks() {
    let s = PasswordStrength::of("Strong@Pass1");
    assert_eq!(s.score, 100);
    assert_eq!(s.label(), StrengthLabel::Strong);
    assert_eq!(s.color(), StrengthColor::Primary);
    assert_eq!(s.color().as_str(), "primary");
}

#[test]
fn password_strength_bands() {
    let weak = PasswordStrength::of("pass");
    assert_eq!(weak.score, 20);
    assert_eq!(weak.label(), StrengthLabel::Weak);
    assert_eq!(weak.color().as_str(), "warn");

    let fair = PasswordStrength::of("password1");
    assert_eq!(fair.score, 60);
    assert_eq!(fair.label(), StrengthLabel::Fair);
    assert_eq!(fair.color(), StrengthColor::Accent);

    let good = PasswordStrength::of("Password1");
    assert_eq!(good.score, 80);
    assert_eq!(good.label(), StrengthLabel::Good);
    assert_eq!(good.color(), StrengthColor::Primary);

    assert_eq!(PasswordStrength::of("").score, 0);
}
