pub mod cart;
pub mod frame_option;
pub mod gallery;
pub mod paper_type;
pub mod photo;
pub mod post;
pub mod print;
pub mod print_size;
pub mod user;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema, Set, TransactionTrait};
use std::sync::Arc;

use crate::entities::{
    cart::Entity as Cart,
    frame_option::Entity as FrameOption,
    gallery::Entity as Gallery,
    paper_type::Entity as PaperType,
    photo::Entity as Photo,
    post::Entity as Post,
    print::Entity as Print,
    print_size::Entity as PrintSize,
    user::Entity as User,
};

pub async fn setup_schema(db: &DatabaseConnection) {
    let schema = Schema::new(db.get_database_backend());
    let create_print_table = schema.create_table_from_entity(Print);
    let create_size_table = schema.create_table_from_entity(PrintSize);
    let create_paper_table = schema.create_table_from_entity(PaperType);
    let create_frame_table = schema.create_table_from_entity(FrameOption);
    let create_gallery_table = schema.create_table_from_entity(Gallery);
    let create_photo_table = schema.create_table_from_entity(Photo);
    let create_post_table = schema.create_table_from_entity(Post);
    let create_user_table = schema.create_table_from_entity(User);
    let create_cart_table = schema.create_table_from_entity(Cart);

    db.execute(db.get_database_backend().build(&create_print_table))
        .await
        .expect("Failed to create print schema");
    db.execute(db.get_database_backend().build(&create_size_table))
        .await
        .expect("Failed to create print_size schema");
    db.execute(db.get_database_backend().build(&create_paper_table))
        .await
        .expect("Failed to create paper_type schema");
    db.execute(db.get_database_backend().build(&create_frame_table))
        .await
        .expect("Failed to create frame_option schema");
    db.execute(db.get_database_backend().build(&create_gallery_table))
        .await
        .expect("Failed to create gallery schema");
    db.execute(db.get_database_backend().build(&create_photo_table))
        .await
        .expect("Failed to create photo schema");
    db.execute(db.get_database_backend().build(&create_post_table))
        .await
        .expect("Failed to create post schema");
    db.execute(db.get_database_backend().build(&create_user_table))
        .await
        .expect("Failed to create users schema");
    db.execute(db.get_database_backend().build(&create_cart_table))
        .await
        .expect("Failed to create cart schema");
}

fn size(id: &str, name: &str, price_modifier: f64) -> print_size::ActiveModel {
    print_size::ActiveModel {
        id: Set(id.to_owned()),
        name: Set(name.to_owned()),
        price_modifier: Set(price_modifier),
    }
}

fn paper(id: &str, name: &str, price_modifier: f64) -> paper_type::ActiveModel {
    paper_type::ActiveModel {
        id: Set(id.to_owned()),
        name: Set(name.to_owned()),
        price_modifier: Set(price_modifier),
    }
}

fn frame(id: &str, name: &str, price_modifier: f64) -> frame_option::ActiveModel {
    frame_option::ActiveModel {
        id: Set(id.to_owned()),
        name: Set(name.to_owned()),
        price_modifier: Set(price_modifier),
    }
}

//Seeds the static storefront catalog plus the admin account. The catalog
//is trusted configuration, so any failure here is fatal on purpose.
pub async fn primary_setup(db: Arc<DatabaseConnection>) {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let admin_username =
        std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_owned());
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "aperture2025".to_owned());
    let password_hash = argon2
        .hash_password(admin_password.as_bytes(), &salt)
        .expect("Failed to hash password")
        .to_string();

    let new_admin = user::ActiveModel {
        username: Set(admin_username),
        password: Set(password_hash),
        role: Set(user::Role::Admin),
        ..Default::default()
    };

    let prints = [
        print::ActiveModel {
            title: Set("Galway Bay Mist".to_owned()),
            description: Set("A fine art print capturing the ethereal morning mist over Galway Bay. Printed on archival-quality Hahnemühle paper.".to_owned()),
            base_price: Set(150.00),
            image_url: Set("https://images.unsplash.com/photo-1557993636-50f22551b6a4?w=800&q=80".to_owned()),
            is_featured: Set(true),
            is_available: Set(true),
            ..Default::default()
        },
        print::ActiveModel {
            title: Set("Cliffs of Moher".to_owned()),
            description: Set("The dramatic Cliffs of Moher at sunset. A powerful and vibrant image. Printed on archival-quality Hahnemühle paper.".to_owned()),
            base_price: Set(175.00),
            image_url: Set("https://images.unsplash.com/photo-1576628043603-16a7c331a6b0?w=800&q=80".to_owned()),
            is_featured: Set(false),
            is_available: Set(true),
            ..Default::default()
        },
        print::ActiveModel {
            title: Set("Connemara Quiet".to_owned()),
            description: Set("The serene and rugged landscape of Connemara National Park. Printed on archival-quality Hahnemühle paper.".to_owned()),
            base_price: Set(160.00),
            image_url: Set("https://images.unsplash.com/photo-1604512411293-3e5e2e0a2e37?w=800&q=80".to_owned()),
            is_featured: Set(false),
            is_available: Set(true),
            ..Default::default()
        },
        print::ActiveModel {
            title: Set("Shop Street Rhythm".to_owned()),
            description: Set("The bustling energy of Galway's iconic Shop Street. Printed on archival-quality Hahnemühle paper.".to_owned()),
            base_price: Set(120.00),
            image_url: Set("https://images.unsplash.com/photo-1619462828516-72c6f6e522f1?w=800&q=80".to_owned()),
            is_featured: Set(false),
            is_available: Set(true),
            ..Default::default()
        },
    ];

    let sizes = [
        size("8x10", "8\" x 10\"", 0.0),
        size("11x14", "11\" x 14\"", 25.0),
        size("16x20", "16\" x 20\"", 50.0),
        size("20x24", "20\" x 24\"", 75.0),
        size("24x36", "24\" x 36\"", 120.0),
    ];

    let papers = [
        paper("matte", "Archival Matte", 0.0),
        paper("glossy", "Fine Art Glossy", 15.0),
        paper("canvas", "Gallery Canvas", 40.0),
    ];

    let frames = [
        frame("none", "No Frame", 0.0),
        frame("black", "Black Frame", 35.0),
        frame("white", "White Frame", 35.0),
        frame("natural", "Natural Wood", 45.0),
    ];

    let galleries = [
        gallery::ActiveModel {
            id: Set("live-music".to_owned()),
            title: Set("Live Music".to_owned()),
            description: Set("Capturing the energy and passion of live performances.".to_owned()),
            cover_image: Set("https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=800&q=80".to_owned()),
            is_published: Set(true),
        },
        gallery::ActiveModel {
            id: Set("drone".to_owned()),
            title: Set("Drone Photography".to_owned()),
            description: Set("Unique perspectives from high above.".to_owned()),
            cover_image: Set("https://images.unsplash.com/photo-1508349937151-22b67484e5c1?w=800&q=80".to_owned()),
            is_published: Set(true),
        },
        gallery::ActiveModel {
            id: Set("landscapes".to_owned()),
            title: Set("Landscapes".to_owned()),
            description: Set("Exploring the wild beauty of Ireland and beyond.".to_owned()),
            cover_image: Set("https://images.unsplash.com/photo-1517427185303-3a553f19114b?w=800&q=80".to_owned()),
            is_published: Set(true),
        },
        gallery::ActiveModel {
            id: Set("weddings".to_owned()),
            title: Set("Weddings".to_owned()),
            description: Set("Timeless moments and cherished memories.".to_owned()),
            cover_image: Set("https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q=80".to_owned()),
            is_published: Set(true),
        },
        gallery::ActiveModel {
            id: Set("videography".to_owned()),
            title: Set("Videography".to_owned()),
            description: Set("Cinematic stories, dynamic reels, and editing work.".to_owned()),
            cover_image: Set("https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=800&q=80".to_owned()),
            is_published: Set(true),
        },
    ];

    let photos = [
        photo::ActiveModel {
            gallery_id: Set("live-music".to_owned()),
            src: Set("https://images.unsplash.com/photo-1540039155733-5bb3005328d8?w=800&q=80".to_owned()),
            alt: Set("Concert".to_owned()),
            width: Set(800),
            height: Set(1200),
            caption: Set(Some("The main stage act, bathed in light.".to_owned())),
            kind: Set(photo::MediaKind::Image),
            video_src: Set(None),
            ..Default::default()
        },
        photo::ActiveModel {
            gallery_id: Set("live-music".to_owned()),
            src: Set("https://images.unsplash.com/photo-1495364144593-272cb8156184?w=1200&q=80".to_owned()),
            alt: Set("Guitarist".to_owned()),
            width: Set(1200),
            height: Set(800),
            caption: Set(None),
            kind: Set(photo::MediaKind::Image),
            video_src: Set(None),
            ..Default::default()
        },
        photo::ActiveModel {
            gallery_id: Set("drone".to_owned()),
            src: Set("https://images.unsplash.com/photo-1517524206127-48bbd363f357?w=1200&q=80".to_owned()),
            alt: Set("Coastal aerial view".to_owned()),
            width: Set(1200),
            height: Set(800),
            caption: Set(Some("The Wild Atlantic Way from 400ft.".to_owned())),
            kind: Set(photo::MediaKind::Image),
            video_src: Set(None),
            ..Default::default()
        },
        photo::ActiveModel {
            gallery_id: Set("landscapes".to_owned()),
            src: Set("https://images.unsplash.com/photo-1576628043603-16a7c331a6b0?w=1200&q=80".to_owned()),
            alt: Set("Cliffs".to_owned()),
            width: Set(1200),
            height: Set(800),
            caption: Set(Some("Sunset over the Cliffs of Moher.".to_owned())),
            kind: Set(photo::MediaKind::Image),
            video_src: Set(None),
            ..Default::default()
        },
        photo::ActiveModel {
            gallery_id: Set("weddings".to_owned()),
            src: Set("https://images.unsplash.com/photo-1523438097201-512ae7d59c44?w=800&q=80".to_owned()),
            alt: Set("Bride and groom".to_owned()),
            width: Set(800),
            height: Set(1200),
            caption: Set(None),
            kind: Set(photo::MediaKind::Image),
            video_src: Set(None),
            ..Default::default()
        },
        photo::ActiveModel {
            gallery_id: Set("videography".to_owned()),
            src: Set("https://images.unsplash.com/photo-1500329862956-6f6c9a3a38a7?w=1200&q=80".to_owned()),
            alt: Set("Field of Flowers".to_owned()),
            width: Set(1200),
            height: Set(800),
            caption: Set(Some("Summer Reel 2024".to_owned())),
            kind: Set(photo::MediaKind::Video),
            video_src: Set(Some("https://assets.mixkit.co/videos/preview/mixkit-a-close-up-of-a-woman-in-a-field-of-flowers-42253-large.mp4".to_owned())),
            ..Default::default()
        },
    ];

    let posts = [
        post::ActiveModel {
            slug: Set("isolation-portraits-covid-galway".to_owned()),
            title: Set("Isolation Portraits: Capturing Galway Through COVID-19".to_owned()),
            excerpt: Set("During the darkest days of lockdown, I documented the resilience and creativity of Galway residents through my lens.".to_owned()),
            body: Set("March 2020 changed everything. As Ireland went into lockdown, the streets fell silent, and suddenly, everyone was confined to their homes. I started the Isolation Portraits project to document this unprecedented moment in Galway's history, staying within the 2km travel limit and photographing neighbours outside their homes.".to_owned()),
            cover_image: Set("/images/blog/isolation-portraits.jpg".to_owned()),
            category: Set("Documentary".to_owned()),
            published_at: Set("2020-05-15".to_owned()),
            read_minutes: Set(8),
            is_featured: Set(true),
            ..Default::default()
        },
        post::ActiveModel {
            slug: Set("printing-for-longevity".to_owned()),
            title: Set("Printing for Longevity: Why Paper Choice Matters".to_owned()),
            excerpt: Set("A look behind the print store: archival papers, pigment inks, and how a print earns a 100-year lifespan.".to_owned()),
            body: Set("Every print in the store is produced on archival-quality Hahnemühle paper with pigment inks. This post walks through the differences between matte, glossy and canvas stocks, and why the surface you choose changes how a photograph reads on the wall.".to_owned()),
            cover_image: Set("/images/blog/printing-longevity.jpg".to_owned()),
            category: Set("Craft".to_owned()),
            published_at: Set("2024-03-02".to_owned()),
            read_minutes: Set(5),
            is_featured: Set(false),
            ..Default::default()
        },
    ];

    match db.begin().await {
        Ok(txn) => {
            let result = async {
                user::Entity::insert(new_admin).exec(&txn).await?;
                print::Entity::insert_many(prints).exec(&txn).await?;
                print_size::Entity::insert_many(sizes).exec(&txn).await?;
                paper_type::Entity::insert_many(papers).exec(&txn).await?;
                frame_option::Entity::insert_many(frames).exec(&txn).await?;
                gallery::Entity::insert_many(galleries).exec(&txn).await?;
                photo::Entity::insert_many(photos).exec(&txn).await?;
                post::Entity::insert_many(posts).exec(&txn).await?;
                Ok::<(), sea_orm::DbErr>(())
            }
            .await;

            match result {
                Ok(_) => match txn.commit().await {
                    Ok(_) => {}
                    Err(_) => {
                        panic!("Failed to seed the catalog, but setup was requested.");
                    }
                },
                Err(_) => {
                    let _ = txn.rollback().await;
                    panic!("Failed to seed the catalog, but setup was requested.");
                }
            }
        }
        Err(_) => {
            panic!("Failed to seed the catalog, but setup was requested.");
        }
    }
}
