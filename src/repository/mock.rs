//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::about::{About, SaveAbout};
use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::certificate::{Certificate, NewCertificate, UpdateCertificate};
use crate::domain::company_intro::{CompanyIntro, SaveCompanyIntro};
use crate::domain::contact::{Contact, NewContact};
use crate::domain::feature::{
    FeatureItem, FeatureSection, NewFeatureItem, NewFeatureSection, UpdateFeatureSection,
};
use crate::domain::header_link::{HeaderLink, NewHeaderLink, UpdateHeaderLink};
use crate::domain::project::{NewProject, Project, ProjectsBackground, UpdateProject};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::statistic::{NewStatistic, Statistic, UpdateStatistic};
use crate::domain::story::{NewStory, Story, UpdateStory};
use crate::domain::team::{NewTeamMember, TeamMember, UpdateTeamMember};
use crate::domain::types::{
    BlogId, CertificateId, FeatureItemId, FeatureSectionId, HeaderLinkId,
    Language, ProjectId, ServiceId, StatisticId, StoryId, TeamMemberId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AboutReader, AboutWriter, BlogReader, BlogWriter, CertificateReader, CertificateWriter,
    CompanyIntroReader, CompanyIntroWriter, ContactReader, ContactWriter, ContentListQuery,
    FeatureReader, FeatureWriter, HeaderLinkReader, HeaderLinkWriter, ProjectReader,
    ProjectWriter, ServiceReader, ServiceWriter, StatisticReader, StatisticWriter, StoryReader,
    StoryWriter, TeamReader, TeamWriter, UploadReferenceReader,
};

mock! {
    pub Repository {}

    impl AboutReader for Repository {
        fn get_about(&self, lang: Language) -> RepositoryResult<Option<About>>;
    }

    impl AboutWriter for Repository {
        fn save_about(&self, about: &SaveAbout) -> RepositoryResult<About>;
    }

    impl BlogReader for Repository {
        fn list_blogs(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Blog>)>;
        fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>>;
    }

    impl BlogWriter for Repository {
        fn create_blog(&self, blog: &NewBlog) -> RepositoryResult<Blog>;
        fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
        fn delete_blog(&self, id: BlogId) -> RepositoryResult<()>;
    }

    impl CertificateReader for Repository {
        fn list_certificates(&self, lang: Language) -> RepositoryResult<Vec<Certificate>>;
        fn get_certificate_by_id(&self, id: CertificateId) -> RepositoryResult<Option<Certificate>>;
    }

    impl CertificateWriter for Repository {
        fn create_certificate(&self, certificate: &NewCertificate) -> RepositoryResult<Certificate>;
        fn update_certificate(
            &self,
            id: CertificateId,
            updates: &UpdateCertificate,
        ) -> RepositoryResult<Certificate>;
        fn delete_certificate(&self, id: CertificateId) -> RepositoryResult<()>;
    }

    impl CompanyIntroReader for Repository {
        fn get_company_intro(&self, lang: Language) -> RepositoryResult<Option<CompanyIntro>>;
    }

    impl CompanyIntroWriter for Repository {
        fn save_company_intro(&self, intro: &SaveCompanyIntro) -> RepositoryResult<CompanyIntro>;
        fn append_company_intro_image(
            &self,
            lang: Language,
            path: &str,
        ) -> RepositoryResult<CompanyIntro>;
        fn remove_company_intro_image(
            &self,
            lang: Language,
            index: usize,
        ) -> RepositoryResult<(CompanyIntro, String)>;
    }

    impl ContactReader for Repository {
        fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, contact: &NewContact) -> RepositoryResult<Contact>;
    }

    impl FeatureReader for Repository {
        fn list_feature_sections(&self, lang: Language) -> RepositoryResult<Vec<FeatureSection>>;
        fn get_feature_section_by_id(
            &self,
            id: FeatureSectionId,
        ) -> RepositoryResult<Option<FeatureSection>>;
    }

    impl FeatureWriter for Repository {
        fn create_feature_section(
            &self,
            section: &NewFeatureSection,
        ) -> RepositoryResult<FeatureSection>;
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

    impl HeaderLinkReader for Repository {
        fn list_header_links(&self, lang: Language) -> RepositoryResult<Vec<HeaderLink>>;
    }

    impl HeaderLinkWriter for Repository {
        fn create_header_link(&self, link: &NewHeaderLink) -> RepositoryResult<HeaderLink>;
        fn update_header_link(
            &self,
            id: HeaderLinkId,
            updates: &UpdateHeaderLink,
        ) -> RepositoryResult<HeaderLink>;
        fn delete_header_link(&self, id: HeaderLinkId) -> RepositoryResult<()>;
    }

    impl ProjectReader for Repository {
        fn list_projects(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
        fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
        fn get_projects_background(&self) -> RepositoryResult<ProjectsBackground>;
    }

    impl ProjectWriter for Repository {
        fn create_project(&self, project: &NewProject) -> RepositoryResult<Project>;
        fn update_project(&self, id: ProjectId, updates: &UpdateProject) -> RepositoryResult<Project>;
        fn delete_project(&self, id: ProjectId) -> RepositoryResult<()>;
        fn set_projects_background(&self, image: &str) -> RepositoryResult<ProjectsBackground>;
    }

    impl ServiceReader for Repository {
        fn list_services(&self, lang: Language) -> RepositoryResult<Vec<Service>>;
    }

    impl ServiceWriter for Repository {
        fn create_service(&self, service: &NewService) -> RepositoryResult<Service>;
        fn update_service(&self, id: ServiceId, updates: &UpdateService) -> RepositoryResult<Service>;
        fn delete_service(&self, id: ServiceId) -> RepositoryResult<()>;
    }

    impl StatisticReader for Repository {
        fn list_statistics(&self, lang: Language) -> RepositoryResult<Vec<Statistic>>;
    }

    impl StatisticWriter for Repository {
        fn create_statistic(&self, statistic: &NewStatistic) -> RepositoryResult<Statistic>;
        fn update_statistic(
            &self,
            id: StatisticId,
            updates: &UpdateStatistic,
        ) -> RepositoryResult<Statistic>;
        fn delete_statistic(&self, id: StatisticId) -> RepositoryResult<()>;
    }

    impl StoryReader for Repository {
        fn list_stories(&self) -> RepositoryResult<Vec<Story>>;
    }

    impl StoryWriter for Repository {
        fn create_story(&self, story: &NewStory) -> RepositoryResult<Story>;
        fn update_story(&self, id: StoryId, updates: &UpdateStory) -> RepositoryResult<Story>;
    }

    impl TeamReader for Repository {
        fn list_team_members(&self, lang: Language) -> RepositoryResult<Vec<TeamMember>>;
        fn get_team_member_by_id(&self, id: TeamMemberId) -> RepositoryResult<Option<TeamMember>>;
    }

    impl TeamWriter for Repository {
        fn create_team_member(&self, member: &NewTeamMember) -> RepositoryResult<TeamMember>;
        fn update_team_member(
            &self,
            id: TeamMemberId,
            updates: &UpdateTeamMember,
        ) -> RepositoryResult<TeamMember>;
        fn delete_team_member(&self, id: TeamMemberId) -> RepositoryResult<()>;
    }

    impl UploadReferenceReader for Repository {
        fn list_upload_references(&self) -> RepositoryResult<Vec<String>>;
    }
}
