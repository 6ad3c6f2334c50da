//! Bundled default content. Served whenever a collection has never been
//! written (or its stored document is unreadable), so a fresh site renders
//! with placeholder content instead of empty pages.

use chrono::{TimeZone, Utc};

use crate::entity::{
    BlogPost, ContactMessage, Education, Experience, MediaItem, Project, Service, SiteSettings,
    Skill, SocialLink,
};

pub fn site_settings() -> SiteSettings {
    SiteSettings {
        site_name: "John Developer".to_string(),
        tagline: "Full-Stack Developer & UI/UX Enthusiast".to_string(),
        bio: "Passionate developer crafting elegant solutions to complex problems. \
              Specialized in modern web technologies and user-centric design."
            .to_string(),
        full_bio: "I'm a full-stack developer with over 5 years of experience building \
                   scalable web applications. My passion lies in creating intuitive user \
                   experiences backed by robust, efficient code. I specialize in React, \
                   Node.js, and modern cloud architectures."
            .to_string(),
        email: "john@developer.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        cv_url: "/assets/cv.pdf".to_string(),
        meta_title: "John Developer - Full-Stack Developer Portfolio".to_string(),
        meta_description: "Explore my portfolio of web development projects, technical blog \
                           posts, and professional services."
            .to_string(),
        og_image: "/assets/og-image.jpg".to_string(),
    }
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/johndeveloper".to_string(),
            icon: "github".to_string(),
        },
        SocialLink {
            platform: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/johndeveloper".to_string(),
            icon: "linkedin".to_string(),
        },
        SocialLink {
            platform: "Twitter".to_string(),
            url: "https://twitter.com/johndev".to_string(),
            icon: "twitter".to_string(),
        },
        SocialLink {
            platform: "Email".to_string(),
            url: "mailto:john@developer.com".to_string(),
            icon: "mail".to_string(),
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    let seed = [
        ("1", "React", "Frontend", 95),
        ("2", "TypeScript", "Frontend", 90),
        ("3", "Node.js", "Backend", 88),
        ("4", "PostgreSQL", "Database", 85),
        ("5", "AWS", "DevOps", 80),
        ("6", "Docker", "DevOps", 82),
        ("7", "Next.js", "Frontend", 92),
        ("8", "GraphQL", "Backend", 78),
    ];
    seed.into_iter()
        .map(|(id, name, category, level)| Skill {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            level,
        })
        .collect()
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            title: "Senior Full-Stack Developer".to_string(),
            company: "Tech Innovations Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "2021-03".to_string(),
            end_date: None,
            current: true,
            description: "Leading development of cloud-native applications using React, \
                          Node.js, and AWS. Mentoring junior developers and architecting \
                          scalable solutions for enterprise clients."
                .to_string(),
        },
        Experience {
            id: "2".to_string(),
            title: "Full-Stack Developer".to_string(),
            company: "Digital Solutions Co.".to_string(),
            location: "Remote".to_string(),
            start_date: "2019-06".to_string(),
            end_date: Some("2021-02".to_string()),
            current: false,
            description: "Built responsive web applications and RESTful APIs. Collaborated \
                          with design teams to implement pixel-perfect UIs and optimize \
                          application performance."
                .to_string(),
        },
        Experience {
            id: "3".to_string(),
            title: "Frontend Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "New York, NY".to_string(),
            start_date: "2018-01".to_string(),
            end_date: Some("2019-05".to_string()),
            current: false,
            description: "Developed interactive user interfaces using React and modern \
                          JavaScript. Implemented state management solutions and integrated \
                          third-party APIs."
                .to_string(),
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        id: "1".to_string(),
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "University of California".to_string(),
        location: "Berkeley, CA".to_string(),
        start_date: "2014-09".to_string(),
        end_date: "2018-05".to_string(),
        description: "Focused on software engineering, algorithms, and web development. \
                      Graduated with honors."
            .to_string(),
    }]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "E-Commerce Platform".to_string(),
            description: "A full-featured online shopping platform with real-time inventory \
                          management"
                .to_string(),
            long_description: "Built a comprehensive e-commerce solution featuring user \
                               authentication, product catalog, shopping cart, payment \
                               integration with Stripe, order tracking, and an admin \
                               dashboard."
                .to_string(),
            image: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800".to_string(),
            gallery: vec![
                "https://images.unsplash.com/photo-1557821552-17105176677c?w=800".to_string(),
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800".to_string(),
            ],
            tech_stack: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "Stripe".to_string(),
            ],
            category: "Full-Stack Development".to_string(),
            featured: true,
            live_url: Some("https://ecommerce-demo.com".to_string()),
            github_url: Some("https://github.com/johndeveloper/ecommerce".to_string()),
            completed_date: "2023-11".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Task Management App".to_string(),
            description: "Collaborative project management tool with real-time updates"
                .to_string(),
            long_description: "Developed a Trello-like task management application with \
                               drag-and-drop functionality, real-time collaboration, team \
                               workspaces, and advanced filtering."
                .to_string(),
            image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800"
                .to_string(),
            gallery: vec![
                "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800".to_string()
            ],
            tech_stack: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "MongoDB".to_string(),
            ],
            category: "Full-Stack Development".to_string(),
            featured: true,
            live_url: Some("https://taskmanager-demo.com".to_string()),
            github_url: Some("https://github.com/johndeveloper/taskmanager".to_string()),
            completed_date: "2023-08".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Weather Dashboard".to_string(),
            description: "Real-time weather tracking with interactive maps and forecasts"
                .to_string(),
            long_description: "Created a weather application that displays current \
                               conditions, 7-day forecasts, and interactive weather maps."
                .to_string(),
            image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800"
                .to_string(),
            gallery: vec![
                "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800".to_string()
            ],
            tech_stack: vec!["React".to_string(), "OpenWeather API".to_string()],
            category: "Frontend Development".to_string(),
            featured: false,
            live_url: Some("https://weather-demo.com".to_string()),
            github_url: Some("https://github.com/johndeveloper/weather".to_string()),
            completed_date: "2023-05".to_string(),
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Building Scalable React Applications".to_string(),
            excerpt: "Learn best practices for structuring large-scale React applications \
                      with proper state management and component architecture."
                .to_string(),
            content: "# Building Scalable React Applications\n\nWhen building large React \
                      applications, proper architecture is crucial..."
                .to_string(),
            image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800"
                .to_string(),
            author: "John Developer".to_string(),
            published_date: "2024-01-15".to_string(),
            tags: vec![
                "React".to_string(),
                "Architecture".to_string(),
                "Best Practices".to_string(),
            ],
            category: "Frontend Development".to_string(),
            read_time: 8,
        },
        BlogPost {
            id: "2".to_string(),
            title: "Mastering TypeScript Generics".to_string(),
            excerpt: "A deep dive into TypeScript generics and how they can make your code \
                      more reusable and type-safe."
                .to_string(),
            content: "# Mastering TypeScript Generics\n\nGenerics are one of the most \
                      powerful features in TypeScript..."
                .to_string(),
            image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800"
                .to_string(),
            author: "John Developer".to_string(),
            published_date: "2024-01-08".to_string(),
            tags: vec!["TypeScript".to_string(), "Tutorial".to_string()],
            category: "Web Development".to_string(),
            read_time: 12,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            title: "Web Application Development".to_string(),
            description: "Custom web applications built with modern technologies and best \
                          practices"
                .to_string(),
            icon: "code".to_string(),
            features: vec![
                "Full-stack development".to_string(),
                "Responsive design".to_string(),
                "API integration".to_string(),
                "Cloud deployment".to_string(),
            ],
        },
        Service {
            id: "2".to_string(),
            title: "Technical Consulting".to_string(),
            description: "Expert guidance on technology stack and architecture decisions"
                .to_string(),
            icon: "lightbulb".to_string(),
            features: vec![
                "Architecture review".to_string(),
                "Technology selection".to_string(),
                "Code review".to_string(),
            ],
        },
        Service {
            id: "3".to_string(),
            title: "Maintenance & Support".to_string(),
            description: "Ongoing support to keep your applications running smoothly"
                .to_string(),
            icon: "wrench".to_string(),
            features: vec![
                "Bug fixes".to_string(),
                "Feature updates".to_string(),
                "Security patches".to_string(),
            ],
        },
    ]
}

pub fn contact_messages() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Hi, I'm interested in discussing a web development project for my \
                      startup."
                .to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 30, 0).unwrap(),
            read: false,
        },
        ContactMessage {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "m.chen@company.com".to_string(),
            subject: "Collaboration Opportunity".to_string(),
            message: "Would love to explore potential collaboration on our upcoming \
                      e-commerce platform."
                .to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 19, 14, 15, 0).unwrap(),
            read: true,
        },
        ContactMessage {
            id: "3".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily.r@tech.io".to_string(),
            subject: "Consulting Request".to_string(),
            message: "We need technical consulting for our React application architecture."
                .to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 18, 9, 45, 0).unwrap(),
            read: false,
        },
    ]
}

/// The media library starts empty; entries only exist after an upload.
pub fn media_library() -> Vec<MediaItem> {
    Vec::new()
}
