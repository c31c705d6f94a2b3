//! Demonstration resume scored when a client sends no text and
//! `SAMPLE_RESUME_FALLBACK` is on.

pub const SAMPLE_RESUME_NAME: &str = "Sample Resume";

pub const SAMPLE_RESUME: &str = "John Smith
Software Engineer
john.smith@email.com | (555) 123-4567 | linkedin.com/in/johnsmith

SUMMARY
Experienced software engineer with 5+ years of experience in full-stack web development.
Proficient in JavaScript, Python, React, and Node.js. Strong background in building
scalable applications and working with databases.

TECHNICAL SKILLS
• Programming Languages: JavaScript, Python, Java, SQL
• Frameworks: React, Node.js, Express, Django
• Databases: PostgreSQL, MongoDB, MySQL
• Tools: Git, Docker, AWS, Linux

PROFESSIONAL EXPERIENCE

Senior Software Engineer | TechCorp Inc. | 2020 - Present
• Developed and maintained web applications using React and Node.js
• Implemented RESTful APIs and database schemas
• Collaborated with cross-functional teams to deliver high-quality software
• Improved application performance by 30% through code optimization

Software Engineer | StartupXYZ | 2018 - 2020
• Built responsive web interfaces using React and JavaScript
• Worked with PostgreSQL and MongoDB databases
• Participated in agile development processes
• Contributed to open-source projects

EDUCATION
Bachelor of Science in Computer Science
University of Technology | 2014 - 2018

PROJECTS
• E-commerce Platform: Built a full-stack e-commerce application using React and Node.js
• Task Management App: Developed a collaborative task management tool with real-time updates
• Data Visualization Dashboard: Created interactive dashboards using Python and D3.js
";
