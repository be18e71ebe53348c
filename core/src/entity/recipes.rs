use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub cuisine_type: Option<String>,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub utensils_required: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub nutritional_info: Option<Json>,
    pub image_url: Option<String>,
    pub generated_by_ai: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ProfileId",
        to = "super::profiles::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profiles,
    #[sea_orm(has_many = "super::recipe_favorites::Entity")]
    RecipeFavorites,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl Related<super::recipe_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
