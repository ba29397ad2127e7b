use diesel::RunQueryDsl;

use corporate_site::domain::about::{NewAboutBlock, SaveAbout};
use corporate_site::domain::blog::{NewBlog, UpdateBlog};
use corporate_site::domain::company_intro::SaveCompanyIntro;
use corporate_site::domain::contact::NewContact;
use corporate_site::domain::feature::{NewFeatureItem, NewFeatureSection};
use corporate_site::domain::header_link::{NewHeaderLink, UpdateHeaderLink};
use corporate_site::domain::story::{NewStory, UpdateStory};
use corporate_site::domain::team::{NewTeamMember, NewTeamSocial, UpdateTeamMember};
use corporate_site::domain::types::{
    BlogId, ContactEmail, FeatureItemId, FeatureSectionId, HeaderLinkId, Language, LinkTarget,
    PersonName, PlainText, RichText, SocialUrl, StoryId, Title,
};
use corporate_site::repository::errors::RepositoryError;
use corporate_site::repository::{
    AboutReader, AboutWriter, BlogReader, BlogWriter, CompanyIntroReader, CompanyIntroWriter,
    ContactReader, ContactWriter, ContentListQuery, DieselRepository, FeatureReader,
    FeatureWriter, HeaderLinkReader, HeaderLinkWriter, ProjectReader, ProjectWriter, StoryReader,
    StoryWriter, TeamReader, TeamWriter, UploadReferenceReader,
};

mod common;

fn new_blog(lang: Language, title: &str) -> NewBlog {
    NewBlog {
        lang,
        title: Title::new(title).unwrap(),
        excerpt: None,
        content: RichText::new("<p>Body</p>").unwrap(),
        author: Some("Editor".into()),
        image: None,
        additional_images: vec![],
    }
}

fn link(lang: Language, label: &str, sort_order: i32) -> NewHeaderLink {
    NewHeaderLink {
        lang,
        label: PlainText::new(label).unwrap(),
        url: LinkTarget::new("#section").unwrap(),
        sort_order,
    }
}

#[test]
fn test_header_link_crud_and_language_filter() {
    let test_db = common::TestDb::new("test_header_link_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let second = repo.create_header_link(&link(Language::En, "Contact", 2)).unwrap();
    let first = repo.create_header_link(&link(Language::En, "Home", 1)).unwrap();
    repo.create_header_link(&link(Language::Ar, "الرئيسية", 1)).unwrap();

    let en = repo.list_header_links(Language::En).unwrap();
    assert_eq!(en.len(), 2);
    assert_eq!(en[0].id, first.id);
    assert_eq!(en[1].id, second.id);
    assert_eq!(repo.list_header_links(Language::Ar).unwrap().len(), 1);

    let updated = repo
        .update_header_link(
            second.id,
            &UpdateHeaderLink {
                label: PlainText::new("Get in touch").unwrap(),
                url: LinkTarget::new("/contact").unwrap(),
                sort_order: 0,
            },
        )
        .unwrap();
    assert_eq!(updated.label, "Get in touch");
    assert_eq!(updated.lang, Language::En);
    assert_eq!(repo.list_header_links(Language::En).unwrap()[0].id, second.id);

    repo.delete_header_link(first.id).unwrap();
    assert_eq!(repo.list_header_links(Language::En).unwrap().len(), 1);
}

#[test]
fn test_missing_rows_are_not_found() {
    let test_db = common::TestDb::new("test_missing_rows_are_not_found.db");
    let repo = DieselRepository::new(test_db.pool());
    let missing_link = HeaderLinkId::new(42).unwrap();

    assert!(matches!(
        repo.delete_header_link(missing_link),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_header_link(
            missing_link,
            &UpdateHeaderLink {
                label: PlainText::new("x").unwrap(),
                url: LinkTarget::new("#x").unwrap(),
                sort_order: 0,
            },
        ),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_blog(BlogId::new(7).unwrap()),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_story(
            StoryId::new(3).unwrap(),
            &UpdateStory {
                title: Title::new("Story").unwrap(),
                content: RichText::new("Text").unwrap(),
            },
        ),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.add_feature_item(
            FeatureSectionId::new(9).unwrap(),
            &NewFeatureItem {
                content: PlainText::new("Line").unwrap(),
                sort_order: 0,
            },
        ),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_feature_item(FeatureItemId::new(9).unwrap()),
        Err(RepositoryError::NotFound)
    ));
    assert!(repo.get_blog_by_id(BlogId::new(7).unwrap()).unwrap().is_none());
}

#[test]
fn test_blog_pagination_and_gallery_updates() {
    let test_db = common::TestDb::new("test_blog_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..5 {
        repo.create_blog(&new_blog(Language::En, &format!("Post {i}"))).unwrap();
    }
    repo.create_blog(&new_blog(Language::Ar, "مقال")).unwrap();

    let (total, all) = repo.list_blogs(ContentListQuery::new(Language::En)).unwrap();
    assert_eq!(total, 5);
    assert_eq!(all.len(), 5);
    // Newest first.
    assert_eq!(all[0].title, "Post 4");

    let (total, page) = repo
        .list_blogs(ContentListQuery::new(Language::En).paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "Post 2");

    let (_, last) = repo
        .list_blogs(ContentListQuery::new(Language::En).paginate(3, 2))
        .unwrap();
    assert_eq!(last.len(), 1);

    let blog = repo
        .create_blog(&NewBlog {
            image: Some("/uploads/cover.png".into()),
            additional_images: vec!["/uploads/g1.png".into(), "/uploads/g2.png".into()],
            ..new_blog(Language::En, "Gallery")
        })
        .unwrap();
    assert_eq!(blog.additional_images.len(), 2);

    let kept = repo
        .update_blog(
            blog.id,
            &UpdateBlog {
                title: Title::new("Gallery 2").unwrap(),
                excerpt: Some("Short".into()),
                content: RichText::new("Body").unwrap(),
                author: None,
                image: None,
                additional_images: None,
            },
        )
        .unwrap();
    assert_eq!(kept.image.as_deref(), Some("/uploads/cover.png"));
    assert_eq!(kept.additional_images, blog.additional_images);

    let replaced = repo
        .update_blog(
            blog.id,
            &UpdateBlog {
                title: Title::new("Gallery 3").unwrap(),
                excerpt: None,
                content: RichText::new("Body").unwrap(),
                author: None,
                image: Some("/uploads/new-cover.png".into()),
                additional_images: Some(vec!["/uploads/g3.png".into()]),
            },
        )
        .unwrap();
    assert_eq!(replaced.image.as_deref(), Some("/uploads/new-cover.png"));
    assert_eq!(replaced.additional_images, vec!["/uploads/g3.png".to_string()]);
}

#[test]
fn test_about_upsert_replaces_blocks() {
    let test_db = common::TestDb::new("test_about_upsert.db");
    let repo = DieselRepository::new(test_db.pool());
    let block = |title: &str, sort_order| NewAboutBlock {
        title: Title::new(title).unwrap(),
        content: PlainText::new("Text").unwrap(),
        sort_order,
    };

    assert!(repo.get_about(Language::En).unwrap().is_none());

    let created = repo
        .save_about(&SaveAbout {
            lang: Language::En,
            title: Title::new("About us").unwrap(),
            subtitle: None,
            description: PlainText::new("We build.").unwrap(),
            image: Some("/uploads/about.png".into()),
            blocks: Some(vec![block("Vision", 1), block("Mission", 0)]),
        })
        .unwrap();
    assert_eq!(created.blocks.len(), 2);
    assert_eq!(created.blocks[0].title, "Mission");

    let updated = repo
        .save_about(&SaveAbout {
            lang: Language::En,
            title: Title::new("Who we are").unwrap(),
            subtitle: Some("Since 1990".into()),
            description: PlainText::new("We still build.").unwrap(),
            image: None,
            blocks: None,
        })
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.image.as_deref(), Some("/uploads/about.png"));
    assert_eq!(updated.blocks.len(), 2);

    let replaced = repo
        .save_about(&SaveAbout {
            lang: Language::En,
            title: Title::new("Who we are").unwrap(),
            subtitle: None,
            description: PlainText::new("We still build.").unwrap(),
            image: None,
            blocks: Some(vec![block("Values", 0)]),
        })
        .unwrap();
    assert_eq!(replaced.blocks.len(), 1);
    assert_eq!(replaced.blocks[0].title, "Values");

    assert!(repo.get_about(Language::Ar).unwrap().is_none());
}

#[test]
fn test_company_intro_keeps_images_on_text_save() {
    let test_db = common::TestDb::new("test_company_intro.db");
    let repo = DieselRepository::new(test_db.pool());
    let intro = SaveCompanyIntro {
        lang: Language::Ar,
        headline: Title::new("نبني المستقبل").unwrap(),
        subheadline: None,
        description: PlainText::new("شركة مقاولات").unwrap(),
    };

    let saved = repo.save_company_intro(&intro).unwrap();
    assert!(saved.images.is_empty());

    repo.append_company_intro_image(Language::Ar, "/uploads/a.png")
        .unwrap();
    let resaved = repo.save_company_intro(&intro).unwrap();
    assert_eq!(resaved.id, saved.id);
    assert_eq!(resaved.images, vec!["/uploads/a.png".to_string()]);

    let loaded = repo.get_company_intro(Language::Ar).unwrap().unwrap();
    assert_eq!(loaded.images, resaved.images);
}

#[test]
fn test_feature_sections_with_items() {
    let test_db = common::TestDb::new("test_feature_sections.db");
    let repo = DieselRepository::new(test_db.pool());

    let section = repo
        .create_feature_section(&NewFeatureSection {
            lang: Language::En,
            title: Title::new("Quality").unwrap(),
            description: None,
            sort_order: 0,
            items: vec![
                NewFeatureItem {
                    content: PlainText::new("ISO certified").unwrap(),
                    sort_order: 0,
                },
                NewFeatureItem {
                    content: PlainText::new("Audited yearly").unwrap(),
                    sort_order: 1,
                },
            ],
        })
        .unwrap();
    assert_eq!(section.items.len(), 2);

    let item = repo
        .add_feature_item(
            section.id,
            &NewFeatureItem {
                content: PlainText::new("First").unwrap(),
                sort_order: -1,
            },
        )
        .unwrap();
    assert_eq!(item.section_id, section.id);

    let sections = repo.list_feature_sections(Language::En).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].items[0].content, "First");
    assert_eq!(sections[0].items.len(), 3);

    repo.delete_feature_item(item.id).unwrap();
    let reloaded = repo.get_feature_section_by_id(section.id).unwrap().unwrap();
    assert_eq!(reloaded.items.len(), 2);
    assert!(repo.list_feature_sections(Language::Ar).unwrap().is_empty());
}

#[test]
fn test_team_socials_follow_member() {
    let test_db = common::TestDb::new("test_team_socials.db");
    let repo = DieselRepository::new(test_db.pool());
    let social = |platform: &str, url: &str| NewTeamSocial {
        platform: PlainText::new(platform).unwrap(),
        url: SocialUrl::new(url).unwrap(),
    };

    let member = repo
        .create_team_member(&NewTeamMember {
            lang: Language::En,
            name: PersonName::new("Layla").unwrap(),
            position: PlainText::new("Engineer").unwrap(),
            bio: None,
            photo: Some("/uploads/layla.jpg".into()),
            sort_order: 0,
            socials: vec![social("linkedin", "https://linkedin.com/in/layla")],
        })
        .unwrap();
    assert_eq!(member.socials.len(), 1);

    let kept = repo
        .update_team_member(
            member.id,
            &UpdateTeamMember {
                name: PersonName::new("Layla H.").unwrap(),
                position: PlainText::new("Lead engineer").unwrap(),
                bio: Some("Bridges".into()),
                photo: None,
                sort_order: 1,
                socials: None,
            },
        )
        .unwrap();
    assert_eq!(kept.socials.len(), 1);
    assert_eq!(kept.photo.as_deref(), Some("/uploads/layla.jpg"));

    let replaced = repo
        .update_team_member(
            member.id,
            &UpdateTeamMember {
                name: PersonName::new("Layla H.").unwrap(),
                position: PlainText::new("Lead engineer").unwrap(),
                bio: None,
                photo: None,
                sort_order: 1,
                socials: Some(vec![
                    social("x", "https://x.com/layla"),
                    social("github", "https://github.com/layla"),
                ]),
            },
        )
        .unwrap();
    assert_eq!(replaced.socials.len(), 2);
    assert_eq!(replaced.socials[0].platform, "x");

    repo.delete_team_member(member.id).unwrap();
    assert!(repo.get_team_member_by_id(member.id).unwrap().is_none());
    assert!(repo.list_team_members(Language::En).unwrap().is_empty());
}

#[test]
fn test_story_and_contacts() {
    let test_db = common::TestDb::new("test_story_and_contacts.db");
    let repo = DieselRepository::new(test_db.pool());

    let story = repo
        .create_story(&NewStory {
            title: Title::new("Our beginning").unwrap(),
            content: RichText::new("<p>It began</p><script>alert(1)</script>").unwrap(),
        })
        .unwrap();
    assert_eq!(story.content, "<p>It began</p>");
    assert_eq!(repo.list_stories().unwrap().len(), 1);

    repo.create_contact(&NewContact {
        name: PersonName::new("Sam").unwrap(),
        email: ContactEmail::new("sam@example.com").unwrap(),
        phone: None,
        subject: Some("Quote".into()),
        message: RichText::new("Need a quote").unwrap(),
    })
    .unwrap();
    let contacts = repo.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "sam@example.com");
}

#[test]
fn test_projects_background_singleton() {
    let test_db = common::TestDb::new("test_projects_background.db");
    let repo = DieselRepository::new(test_db.pool());

    let empty = repo.get_projects_background().unwrap();
    assert!(empty.image.is_none());

    repo.set_projects_background("/uploads/bg1.png").unwrap();
    let second = repo.set_projects_background("/uploads/bg2.png").unwrap();
    assert_eq!(second.image.as_deref(), Some("/uploads/bg2.png"));
    assert_eq!(
        repo.get_projects_background().unwrap().image.as_deref(),
        Some("/uploads/bg2.png")
    );
}

#[test]
fn test_upload_references_cover_every_table() {
    let test_db = common::TestDb::new("test_upload_references.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_blog(&NewBlog {
        image: Some("/uploads/blog.png".into()),
        additional_images: vec!["/uploads/shared.png".into()],
        ..new_blog(Language::En, "Post")
    })
    .unwrap();
    repo.set_projects_background("/uploads/bg.png").unwrap();
    let intro = repo
        .save_company_intro(&SaveCompanyIntro {
            lang: Language::En,
            headline: Title::new("Hello").unwrap(),
            subheadline: None,
            description: PlainText::new("World").unwrap(),
        })
        .unwrap();
    repo.append_company_intro_image(intro.lang, "/uploads/shared.png")
        .unwrap();
    repo.append_company_intro_image(intro.lang, "/uploads/intro.png")
        .unwrap();

    let references = repo.list_upload_references().unwrap();
    assert_eq!(
        references,
        vec![
            "/uploads/bg.png".to_string(),
            "/uploads/blog.png".to_string(),
            "/uploads/intro.png".to_string(),
            "/uploads/shared.png".to_string(),
        ]
    );
}

#[test]
fn test_failed_child_insert_rolls_back_member() {
    let test_db = common::TestDb::new("test_failed_child_insert.db");
    let repo = DieselRepository::new(test_db.pool());
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query(
            "CREATE TRIGGER reject_social BEFORE INSERT ON team_socials \
             WHEN NEW.platform = 'broken' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .execute(&mut conn)
        .unwrap();
    }

    let result = repo.create_team_member(&NewTeamMember {
        lang: Language::En,
        name: PersonName::new("Omar").unwrap(),
        position: PlainText::new("Architect").unwrap(),
        bio: None,
        photo: None,
        sort_order: 0,
        socials: vec![NewTeamSocial {
            platform: PlainText::new("broken").unwrap(),
            url: SocialUrl::new("https://example.com/omar").unwrap(),
        }],
    });

    assert!(result.is_err());
    assert!(repo.list_team_members(Language::En).unwrap().is_empty());
}

#[test]
fn test_company_intro_gallery_edits_do_not_lose_images() {
    let test_db = common::TestDb::new("test_company_intro_gallery.db");
    let repo = DieselRepository::new(test_db.pool());
    assert!(matches!(
        repo.append_company_intro_image(Language::En, "/uploads/none.png"),
        Err(RepositoryError::NotFound)
    ));

    repo.save_company_intro(&SaveCompanyIntro {
        lang: Language::En,
        headline: Title::new("Hello").unwrap(),
        subheadline: None,
        description: PlainText::new("World").unwrap(),
    })
    .unwrap();

    std::thread::scope(|scope| {
        for n in 0..8 {
            let repo = &repo;
            scope.spawn(move || {
                repo.append_company_intro_image(Language::En, &format!("/uploads/{n}.png"))
                    .unwrap();
            });
        }
    });

    let mut images = repo.get_company_intro(Language::En).unwrap().unwrap().images;
    images.sort();
    let expected: Vec<String> = (0..8).map(|n| format!("/uploads/{n}.png")).collect();
    assert_eq!(images, expected);

    let (updated, removed) = repo.remove_company_intro_image(Language::En, 0).unwrap();
    assert_eq!(updated.images.len(), 7);
    assert!(!updated.images.contains(&removed));
    assert!(matches!(
        repo.remove_company_intro_image(Language::En, 7),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_failed_block_insert_keeps_previous_about() {
    let test_db = common::TestDb::new("test_failed_about_block.db");
    let repo = DieselRepository::new(test_db.pool());
    let block = |title: &str| NewAboutBlock {
        title: Title::new(title).unwrap(),
        content: PlainText::new("Text").unwrap(),
        sort_order: 0,
    };
    let about = |lang, title: &str, blocks| SaveAbout {
        lang,
        title: Title::new(title).unwrap(),
        subtitle: None,
        description: PlainText::new("We build.").unwrap(),
        image: None,
        blocks: Some(blocks),
    };

    repo.save_about(&about(Language::En, "About us", vec![block("Vision")]))
        .unwrap();
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query(
            "CREATE TRIGGER reject_block BEFORE INSERT ON about_blocks \
             WHEN NEW.title = 'broken' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .execute(&mut conn)
        .unwrap();
    }

    let result = repo.save_about(&about(
        Language::En,
        "Who we are",
        vec![block("Values"), block("broken")],
    ));
    assert!(result.is_err());

    let kept = repo.get_about(Language::En).unwrap().unwrap();
    assert_eq!(kept.title, "About us");
    assert_eq!(kept.blocks.len(), 1);
    assert_eq!(kept.blocks[0].title, "Vision");

    let result = repo.save_about(&about(Language::Ar, "من نحن", vec![block("broken")]));
    assert!(result.is_err());
    assert!(repo.get_about(Language::Ar).unwrap().is_none());
}

#[test]
fn test_failed_item_insert_rolls_back_section() {
    let test_db = common::TestDb::new("test_failed_feature_item.db");
    let repo = DieselRepository::new(test_db.pool());
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query(
            "CREATE TRIGGER reject_item BEFORE INSERT ON features_items \
             WHEN NEW.content = 'broken' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .execute(&mut conn)
        .unwrap();
    }

    let result = repo.create_feature_section(&NewFeatureSection {
        lang: Language::En,
        title: Title::new("Quality").unwrap(),
        description: None,
        sort_order: 0,
        items: vec![
            NewFeatureItem {
                content: PlainText::new("ISO certified").unwrap(),
                sort_order: 0,
            },
            NewFeatureItem {
                content: PlainText::new("broken").unwrap(),
                sort_order: 1,
            },
        ],
    });

    assert!(result.is_err());
    assert!(repo.list_feature_sections(Language::En).unwrap().is_empty());
}
