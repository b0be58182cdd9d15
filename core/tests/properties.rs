use goscaffold_core::fields::{resolve, FieldParser, ParsedField, TypeCategory};
use goscaffold_core::{Inflector, NamingConvention, RelationKind, TemplateData};
use pretty_assertions::assert_eq;

#[test]
fn test_assemble_twice_is_equal() {
    let inflector = Inflector::english();
    let tokens = ["title", "author:belongsTo:User", "tags:m2m", "cover:image", "meta:json"];
    let first = TemplateData::assemble(&inflector, "Post", &tokens).unwrap();
    let second = TemplateData::assemble(&inflector, "Post", &tokens).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_resolve_is_total() {
    for token in ["", " ", "Address", "[]byte", "ünïcödé", "map[string]int", "belongs-to"] {
        let alias = resolve(token);
        assert_eq!(alias.category, TypeCategory::Custom, "token {token:?}");
        assert_eq!(alias.canonical_type, token);
        assert_eq!(alias.target_type, token);
    }
}

#[test]
fn test_naming_is_input_form_independent() {
    let inflector = Inflector::english();
    for input in ["category", "Category", "categories", "Categories"] {
        let naming = NamingConvention::build(&inflector, input).unwrap();
        assert_eq!(naming.model, "Category", "input {input}");
        assert_eq!(naming.table_name, "categories");
        assert_eq!(naming.route_path, "/categories");
        assert_eq!(naming.package_name, "categories");
    }
}

#[test]
fn test_belongs_to_expands_to_two_fields() {
    let inflector = Inflector::english();
    let owner = NamingConvention::build(&inflector, "post").unwrap();
    let parsed = FieldParser::new(&inflector, &owner)
        .parse("author:belongsTo:User")
        .unwrap();

    let ParsedField::BelongsTo {
        foreign_key,
        association,
    } = parsed
    else {
        panic!("expected a belongs-to pair");
    };

    assert_eq!(foreign_key.name, "AuthorId");
    assert_eq!(foreign_key.go_type, "uint");
    assert_eq!(foreign_key.json_name, "author_id");
    assert_eq!(foreign_key.relation_kind, RelationKind::BelongsTo);

    assert_eq!(association.name, "Author");
    assert_eq!(association.go_type, "*User");
    assert!(association.gorm_tag.contains("foreignKey:AuthorId"));
    assert!(association.is_relation);
}

#[test]
fn test_datetime_inference_wins_over_bool() {
    let data = TemplateData::assemble(&Inflector::english(), "article", &["published_at"]).unwrap();
    assert_eq!(data.fields[0].go_type, "time.Time");
    assert!(data.has_time_fields);
}

#[test]
fn test_image_is_an_attachment() {
    let data =
        TemplateData::assemble(&Inflector::english(), "photo", &["file:image", "caption:string"])
            .unwrap();
    assert!(data.has_images);
    assert_eq!(data.has_images, data.has_attachments);
}

#[test]
fn test_post_scenario() {
    let data = TemplateData::assemble(
        &Inflector::english(),
        "Post",
        &["title:string", "published:bool", "author_id:uint"],
    )
    .unwrap();

    assert_eq!(data.fields.len(), 4);
    let author = &data.fields[3];
    assert_eq!(author.name, "Author");
    assert_eq!(author.go_type, "*Author");
    assert_eq!(data.naming.route_group, "posts");
    assert_eq!(data.naming.controller, "PostController");
}

#[test]
fn test_relation_invariant_holds() {
    let data = TemplateData::assemble(
        &Inflector::english(),
        "shop",
        &[
            "owner:belongsTo:User",
            "products:hasMany",
            "address:hasOne",
            "tags:manyToMany",
            "logo:image",
            "name:translation",
            "rating:float",
        ],
    )
    .unwrap();
    for field in &data.fields {
        if field.is_relation {
            assert!(field.relation_kind.is_association(), "{}", field.name);
            assert!(!field.related_model.is_empty(), "{}", field.name);
        }
    }
}
