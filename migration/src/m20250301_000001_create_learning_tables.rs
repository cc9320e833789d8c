use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::IsPublished).boolean().not_null().default(false))
                    .col(ColumnDef::new(Courses::InstructorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Courses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::InstructorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程模块表
        manager
            .create_table(
                Table::create()
                    .table(CourseModules::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseModules::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CourseModules::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseModules::Title).string().not_null())
                    .col(ColumnDef::new(CourseModules::OrderIndex).integer().not_null())
                    .col(ColumnDef::new(CourseModules::Description).text().null())
                    .col(
                        ColumnDef::new(CourseModules::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CourseModules::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(CourseModules::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseModules::Table, CourseModules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学习资源表
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resources::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Resources::ResourceType).string().not_null())
                    .col(ColumnDef::new(Resources::Name).string().not_null())
                    .col(ColumnDef::new(Resources::Url).string().not_null())
                    .col(ColumnDef::new(Resources::UploadedAt).big_integer().not_null())
                    .col(ColumnDef::new(Resources::UploadedById).uuid().not_null())
                    .col(ColumnDef::new(Resources::CourseId).uuid().null())
                    .col(ColumnDef::new(Resources::ModuleId).uuid().null())
                    .col(
                        ColumnDef::new(Resources::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Resources::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Resources::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resources::Table, Resources::UploadedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resources::Table, Resources::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resources::Table, Resources::ModuleId)
                            .to(CourseModules::Table, CourseModules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enrollments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Enrollments::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::UserId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::Status).string().not_null())
                    .col(ColumnDef::new(Enrollments::EnrolledAt).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::UnenrolledAt).big_integer().null())
                    .col(
                        ColumnDef::new(Enrollments::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Enrollments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建测评表
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Evaluations::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Evaluations::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Evaluations::Title).string().not_null())
                    .col(ColumnDef::new(Evaluations::Description).text().null())
                    .col(ColumnDef::new(Evaluations::TotalPoints).double().not_null())
                    .col(ColumnDef::new(Evaluations::OpenAt).big_integer().null())
                    .col(ColumnDef::new(Evaluations::CloseAt).big_integer().null())
                    .col(ColumnDef::new(Evaluations::TimeLimitMinutes).integer().null())
                    .col(ColumnDef::new(Evaluations::IsPublished).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Evaluations::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Evaluations::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Submissions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Submissions::EvaluationId).uuid().not_null())
                    .col(ColumnDef::new(Submissions::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Submissions::AttemptNumber).integer().not_null())
                    .col(ColumnDef::new(Submissions::Content).text().not_null())
                    .col(ColumnDef::new(Submissions::FileUrl).string().null())
                    .col(ColumnDef::new(Submissions::SubmittedAt).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::IsLate).boolean().not_null().default(false))
                    .col(ColumnDef::new(Submissions::Score).double().null())
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Submissions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Notifications::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::Payload).text().null())
                    .col(ColumnDef::new(Notifications::Channel).string().not_null())
                    .col(ColumnDef::new(Notifications::SenderId).uuid().null())
                    .col(ColumnDef::new(Notifications::CourseId).uuid().null())
                    .col(ColumnDef::new(Notifications::ContextType).string().null())
                    .col(ColumnDef::new(Notifications::ContextId).uuid().null())
                    .col(ColumnDef::new(Notifications::SentAt).big_integer().null())
                    .col(ColumnDef::new(Notifications::ExpiresAt).big_integer().null())
                    .col(
                        ColumnDef::new(Notifications::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Notifications::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Notifications::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知接收人表
        manager
            .create_table(
                Table::create()
                    .table(NotificationRecipients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NotificationRecipients::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(NotificationRecipients::NotificationId).uuid().not_null())
                    .col(ColumnDef::new(NotificationRecipients::UserId).uuid().not_null())
                    .col(ColumnDef::new(NotificationRecipients::IsDelivered).boolean().not_null().default(false))
                    .col(ColumnDef::new(NotificationRecipients::DeliveredAt).big_integer().null())
                    .col(ColumnDef::new(NotificationRecipients::IsRead).boolean().not_null().default(false))
                    .col(ColumnDef::new(NotificationRecipients::ReadAt).big_integer().null())
                    .col(
                        ColumnDef::new(NotificationRecipients::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(NotificationRecipients::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(NotificationRecipients::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(NotificationRecipients::Table, NotificationRecipients::NotificationId)
                            .to(Notifications::Table, Notifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(NotificationRecipients::Table, NotificationRecipients::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引（关系查询与待投递扫描）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_instructor")
                    .table(Courses::Table)
                    .col(Courses::InstructorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_modules_course_order")
                    .table(CourseModules::Table)
                    .col(CourseModules::CourseId)
                    .col(CourseModules::OrderIndex)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_resources_course")
                    .table(Resources::Table)
                    .col(Resources::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_resources_module")
                    .table(Resources::Table)
                    .col(Resources::ModuleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_course_user")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseId)
                    .col(Enrollments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_user")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluations_course")
                    .table(Evaluations::Table)
                    .col(Evaluations::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_evaluation_student")
                    .table(Submissions::Table)
                    .col(Submissions::EvaluationId)
                    .col(Submissions::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notification_recipients_user")
                    .table(NotificationRecipients::Table)
                    .col(NotificationRecipients::UserId)
                    .col(NotificationRecipients::IsRead)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notification_recipients_pending")
                    .table(NotificationRecipients::Table)
                    .col(NotificationRecipients::IsDelivered)
                    .col(NotificationRecipients::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(NotificationRecipients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseModules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Role,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Code,
    Description,
    IsPublished,
    InstructorId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseModules {
    #[sea_orm(iden = "course_modules")]
    Table,
    Id,
    CourseId,
    Title,
    OrderIndex,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Resources {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    ResourceType,
    Name,
    Url,
    UploadedAt,
    UploadedById,
    CourseId,
    ModuleId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    CourseId,
    UserId,
    Status,
    EnrolledAt,
    UnenrolledAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Evaluations {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    CourseId,
    Title,
    Description,
    TotalPoints,
    OpenAt,
    CloseAt,
    TimeLimitMinutes,
    IsPublished,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    EvaluationId,
    StudentId,
    AttemptNumber,
    Content,
    FileUrl,
    SubmittedAt,
    IsLate,
    Score,
    Feedback,
    Status,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    Title,
    Message,
    Payload,
    Channel,
    SenderId,
    CourseId,
    ContextType,
    ContextId,
    SentAt,
    ExpiresAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NotificationRecipients {
    #[sea_orm(iden = "notification_recipients")]
    Table,
    Id,
    NotificationId,
    UserId,
    IsDelivered,
    DeliveredAt,
    IsRead,
    ReadAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
