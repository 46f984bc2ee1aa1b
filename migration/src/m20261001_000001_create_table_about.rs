use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(About::Name).string_len(150).not_null())
                    .col(ColumnDef::new(About::Title).string_len(150).not_null())
                    .col(ColumnDef::new(About::Location).string_len(150).not_null())
                    .col(ColumnDef::new(About::Email).string_len(255).not_null())
                    .col(ColumnDef::new(About::Phone).string_len(50))
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::Avatar).text().not_null())
                    .col(ColumnDef::new(About::GithubUrl).text())
                    .col(ColumnDef::new(About::LinkedinUrl).text())
                    .col(ColumnDef::new(About::TwitterUrl).text())
                    .col(ColumnDef::new(About::InstagramUrl).text())
                    .col(ColumnDef::new(About::Whatsapp).string_len(50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Name,
    Title,
    Location,
    Email,
    Phone,
    Bio,
    Avatar,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    InstagramUrl,
    Whatsapp,
}
