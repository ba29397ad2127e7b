use crate::{
    db::{DbConnection, DbPool},
    domain::{
        about::{About, SaveAbout},
        blog::{Blog, NewBlog, UpdateBlog},
        certificate::{Certificate, NewCertificate, UpdateCertificate},
        company_intro::{CompanyIntro, SaveCompanyIntro},
        contact::{Contact, NewContact},
        feature::{FeatureItem, FeatureSection, NewFeatureItem, NewFeatureSection, UpdateFeatureSection},
        header_link::{HeaderLink, NewHeaderLink, UpdateHeaderLink},
        project::{NewProject, Project, ProjectsBackground, UpdateProject},
        service::{NewService, Service, UpdateService},
        statistic::{NewStatistic, Statistic, UpdateStatistic},
        story::{NewStory, Story, UpdateStory},
        team::{NewTeamMember, TeamMember, UpdateTeamMember},
        types::{
            BlogId, CertificateId, FeatureItemId, FeatureSectionId, HeaderLinkId,
            Language, ProjectId, ServiceId, StatisticId, StoryId, TeamMemberId,
        },
    },
    repository::errors::RepositoryResult,
};

pub mod about;
pub mod blog;
pub mod certificate;
pub mod company_intro;
pub mod contact;
pub mod errors;
pub mod feature;
pub mod header_link;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod project;
pub mod service;
pub mod statistic;
pub mod story;
pub mod team;
pub mod uploads;

/// Diesel-backed repository implementing every reader/writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip; page numbers start at 1 and 0 is treated as 1.
    /// `None` when the window lies beyond what SQL `OFFSET` can address.
    pub fn offset(&self) -> Option<i64> {
        let rows = (self.page.max(1) - 1).checked_mul(self.per_page)?;
        i64::try_from(rows).ok()
    }

    pub fn limit(&self) -> Option<i64> {
        i64::try_from(self.per_page).ok()
    }

    /// `(offset, limit)` of the window, if both are addressable.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        Some((self.offset()?, self.limit()?))
    }
}

/// Language-filtered, optionally paginated listing of posts (blogs, projects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentListQuery {
    pub lang: Language,
    pub pagination: Option<Pagination>,
}

impl ContentListQuery {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AboutReader {
    fn get_about(&self, lang: Language) -> RepositoryResult<Option<About>>;
}

pub trait AboutWriter {
    /// Creates or updates the record of `about.lang`, replacing blocks when given.
    fn save_about(&self, about: &SaveAbout) -> RepositoryResult<About>;
}

pub trait BlogReader {
    fn list_blogs(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Blog>)>;
    fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>>;
}

pub trait BlogWriter {
    fn create_blog(&self, blog: &NewBlog) -> RepositoryResult<Blog>;
    fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
    fn delete_blog(&self, id: BlogId) -> RepositoryResult<()>;
}

pub trait CertificateReader {
    fn list_certificates(&self, lang: Language) -> RepositoryResult<Vec<Certificate>>;
    fn get_certificate_by_id(&self, id: CertificateId) -> RepositoryResult<Option<Certificate>>;
}

pub trait CertificateWriter {
    fn create_certificate(&self, certificate: &NewCertificate) -> RepositoryResult<Certificate>;
    fn update_certificate(
        &self,
        id: CertificateId,
        updates: &UpdateCertificate,
    ) -> RepositoryResult<Certificate>;
    fn delete_certificate(&self, id: CertificateId) -> RepositoryResult<()>;
}

pub trait CompanyIntroReader {
    fn get_company_intro(&self, lang: Language) -> RepositoryResult<Option<CompanyIntro>>;
}

pub trait CompanyIntroWriter {
    /// Creates or updates the text of the intro of `intro.lang`, keeping its images.
    fn save_company_intro(&self, intro: &SaveCompanyIntro) -> RepositoryResult<CompanyIntro>;
    /// Appends `path` to the gallery of the intro of `lang` in one write
    /// transaction.
    fn append_company_intro_image(
        &self,
        lang: Language,
        path: &str,
    ) -> RepositoryResult<CompanyIntro>;
    /// Drops the gallery entry at `index`, returning the intro and the removed path.
    fn remove_company_intro_image(
        &self,
        lang: Language,
        index: usize,
    ) -> RepositoryResult<(CompanyIntro, String)>;
}

pub trait ContactReader {
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;
}

pub trait ContactWriter {
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<Contact>;
}

pub trait FeatureReader {
    fn list_feature_sections(&self, lang: Language) -> RepositoryResult<Vec<FeatureSection>>;
    fn get_feature_section_by_id(
        &self,
        id: FeatureSectionId,
    ) -> RepositoryResult<Option<FeatureSection>>;
}

pub trait FeatureWriter {
    fn create_feature_section(&self, section: &NewFeatureSection)
    -> RepositoryResult<FeatureSection>;
    fn update_feature_section(
        &self,
        id: FeatureSectionId,
        updates: &UpdateFeatureSection,
    ) -> RepositoryResult<FeatureSection>;
    fn add_feature_item(
        &self,
        section_id: FeatureSectionId,
        item: &NewFeatureItem,
    ) -> RepositoryResult<FeatureItem>;
    fn delete_feature_item(&self, id: FeatureItemId) -> RepositoryResult<()>;
}

pub trait HeaderLinkReader {
    fn list_header_links(&self, lang: Language) -> RepositoryResult<Vec<HeaderLink>>;
}

pub trait HeaderLinkWriter {
    fn create_header_link(&self, link: &NewHeaderLink) -> RepositoryResult<HeaderLink>;
    fn update_header_link(
        &self,
        id: HeaderLinkId,
        updates: &UpdateHeaderLink,
    ) -> RepositoryResult<HeaderLink>;
    fn delete_header_link(&self, id: HeaderLinkId) -> RepositoryResult<()>;
}

pub trait ProjectReader {
    fn list_projects(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
    fn get_projects_background(&self) -> RepositoryResult<ProjectsBackground>;
}

pub trait ProjectWriter {
    fn create_project(&self, project: &NewProject) -> RepositoryResult<Project>;
    fn update_project(&self, id: ProjectId, updates: &UpdateProject) -> RepositoryResult<Project>;
    fn delete_project(&self, id: ProjectId) -> RepositoryResult<()>;
    fn set_projects_background(&self, image: &str) -> RepositoryResult<ProjectsBackground>;
}

pub trait ServiceReader {
    fn list_services(&self, lang: Language) -> RepositoryResult<Vec<Service>>;
}

pub trait ServiceWriter {
    fn create_service(&self, service: &NewService) -> RepositoryResult<Service>;
    fn update_service(&self, id: ServiceId, updates: &UpdateService) -> RepositoryResult<Service>;
    fn delete_service(&self, id: ServiceId) -> RepositoryResult<()>;
}

pub trait StatisticReader {
    fn list_statistics(&self, lang: Language) -> RepositoryResult<Vec<Statistic>>;
}

pub trait StatisticWriter {
    fn create_statistic(&self, statistic: &NewStatistic) -> RepositoryResult<Statistic>;
    fn update_statistic(
        &self,
        id: StatisticId,
        updates: &UpdateStatistic,
    ) -> RepositoryResult<Statistic>;
    fn delete_statistic(&self, id: StatisticId) -> RepositoryResult<()>;
}

pub trait StoryReader {
    fn list_stories(&self) -> RepositoryResult<Vec<Story>>;
}

pub trait StoryWriter {
    fn create_story(&self, story: &NewStory) -> RepositoryResult<Story>;
    fn update_story(&self, id: StoryId, updates: &UpdateStory) -> RepositoryResult<Story>;
}

pub trait TeamReader {
    fn list_team_members(&self, lang: Language) -> RepositoryResult<Vec<TeamMember>>;
    fn get_team_member_by_id(&self, id: TeamMemberId) -> RepositoryResult<Option<TeamMember>>;
}

pub trait TeamWriter {
    fn create_team_member(&self, member: &NewTeamMember) -> RepositoryResult<TeamMember>;
    fn update_team_member(
        &self,
        id: TeamMemberId,
        updates: &UpdateTeamMember,
    ) -> RepositoryResult<TeamMember>;
    fn delete_team_member(&self, id: TeamMemberId) -> RepositoryResult<()>;
}

/// Lists every upload path referenced by stored content.
pub trait UploadReferenceReader {
    fn list_upload_references(&self) -> RepositoryResult<Vec<String>>;
}
