use bookstore_core::Book;

fn seeded(id: &str, title: &str, author: &str, genre: &str, price: f64, year: &str, isbn: &str) -> Book {
    Book {
        id: Some(id.to_string()),
        title: title.to_string(),
        author_name: author.to_string(),
        genre: genre.to_string(),
        price,
        published: year.to_string(),
        isbn: isbn.to_string(),
        description: None,
        page_count: None,
        cover_image_url: None,
    }
}

/// Catalog the in-memory service starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        seeded(
            "1",
            "Clean Code",
            "Robert C. Martin",
            "Software Engineering",
            29.99,
            "2008",
            "978-0132350884",
        ),
        seeded(
            "2",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            15.99,
            "1925",
            "978-0743273565",
        ),
        seeded(
            "3",
            "The Girl with the Dragon Tattoo",
            "Stieg Larsson",
            "Mystery",
            18.50,
            "2005",
            "978-0307454546",
        ),
        seeded(
            "4",
            "Dune",
            "Frank Herbert",
            "Science Fiction",
            22.95,
            "1965",
            "978-0441172719",
        ),
    ]
}
