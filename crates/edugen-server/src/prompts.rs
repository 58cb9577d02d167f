//! Prompt templates for the generation operations.
//!
//! Each operation pairs a fixed system instruction (which pins the JSON-only
//! output contract for the structured endpoints) with a templated user
//! instruction embedding the request fields. Builders are deterministic:
//! the same request always yields the same prompt.

use crate::schema::lesson_plan::SessionData;

pub const LESSON_PLAN_SYSTEM: &str = "You are an expert educational content creator specializing in curriculum design for Indian school standards (CBSE syllabus) with NCERT books. Always respond with valid JSON only.";

pub const SESSION_CONTENT_SYSTEM: &str = "You are an expert educational content creator specializing in detailed lesson planning for Indian school standards (CBSE syllabus) with NCERT books. Create comprehensive, engaging lesson content that is age-appropriate and follows pedagogical best practices. Always respond with valid JSON only.";

pub const QUESTIONS_SYSTEM: &str = "You are an expert educator and question paper creator specializing in Indian school standards (CBSE syllabus) with NCERT books. Create high-quality, curriculum-aligned questions that test various cognitive levels according to Bloom's taxonomy. Always respond with valid JSON only.";

pub const KNOWLEDGE_POINTS_SYSTEM: &str = "You are an expert curriculum analyst for Indian school standards (CBSE syllabus) with NCERT books. Decompose curriculum content into atomic, teachable, and assessable knowledge points aligned with Bloom's taxonomy. Always respond with valid JSON only.";

const STUDENT_TUTOR_BASE: &str = "You are an expert tutor for Indian school students (CBSE/NCERT curriculum).
Your role is to provide detailed, educational answers to student questions.

Guidelines:
- Provide clear, detailed explanations with step-by-step reasoning
- Include practical examples and real-world applications
- Use age-appropriate language for the student's level
- Break down complex concepts into simpler parts
- Encourage learning and curiosity
- If the question is outside academic scope, politely redirect to educational topics";

/// User instruction for a multi-session lesson plan.
pub fn lesson_plan_prompt(
    subject_name: &str,
    class_name: &str,
    chapter_title: &str,
    number_of_sessions: u32,
    default_session_duration: &str,
) -> String {
    format!(
        "Create a detailed session plan for a teacher teaching {subject_name} to {class_name} standard students.

Chapter: {chapter_title}
Number of Sessions: {number_of_sessions}

For each session, provide:
1. A clear, engaging session title
2. A comprehensive summary (2-3 sentences) of what will be covered
3. Estimated duration (typically {default_session_duration} per session)
4. 3-4 specific learning objectives

The sessions should:
- Build progressively from basic to advanced concepts
- Be age-appropriate for {class_name} standard students
- Include practical examples and applications
- Cover the complete chapter content across all {number_of_sessions} sessions

Please respond with a JSON array containing exactly {number_of_sessions} session objects, each with the following structure:
{{
  \"sessionNumber\": number,
  \"title\": \"string\",
  \"summary\": \"string\",
  \"duration\": \"string\",
  \"objectives\": [\"objective1\", \"objective2\", \"objective3\", \"objective4\"]
}}"
    )
}

/// User instruction expanding one session into full teaching content.
pub fn session_content_prompt(
    session: &SessionData,
    subject_name: &str,
    class_name: &str,
) -> String {
    let objectives = session
        .objectives
        .iter()
        .map(|obj| format!("- {obj}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create detailed lesson content for the following session:

Session Title: {title}
Subject: {subject_name}
Class: {class_name} standard
Duration: {duration}
Summary: {summary}

Learning Objectives:
{objectives}

Please provide a comprehensive lesson plan with the following sections:

1. **Introduction** (5-10 minutes)
   - Hook/attention grabber
   - Brief overview of what will be covered
   - Connection to previous learning

2. **Main Content** (detailed breakdown)
   - Key concepts explanation
   - Step-by-step teaching sequence
   - Important formulas/definitions
   - Real-world examples and applications

3. **Activities & Practice**
   - Interactive activities for student engagement
   - Practice problems with solutions
   - Group work suggestions
   - Hands-on experiments (if applicable)

4. **Assessment & Evaluation**
   - Quick assessment questions
   - Exit ticket suggestions
   - Homework assignments

5. **Resources & Materials**
   - Required materials/equipment
   - Reference materials
   - Additional reading suggestions

6. **Differentiation Strategies**
   - Support for struggling learners
   - Extensions for advanced students
   - Multiple learning styles accommodation

Please respond with valid JSON only in the following structure:
{{
  \"sessionTitle\": \"string\",
  \"duration\": \"string\",
  \"introduction\": {{
    \"hook\": \"string\",
    \"overview\": \"string\",
    \"previousConnection\": \"string\"
  }},
  \"mainContent\": {{
    \"keyConcepts\": [\"concept1\", \"concept2\", \"concept3\"],
    \"teachingSequence\": [\"step1\", \"step2\", \"step3\"],
    \"formulas\": [\"formula1\", \"formula2\"],
    \"examples\": [\"example1\", \"example2\"]
  }},
  \"activities\": {{
    \"interactive\": [\"activity1\", \"activity2\"],
    \"practiceProblems\": [\"problem1\", \"problem2\"],
    \"groupWork\": \"string\",
    \"experiments\": [\"experiment1\", \"experiment2\"]
  }},
  \"assessment\": {{
    \"quickQuestions\": [\"question1\", \"question2\", \"question3\"],
    \"exitTicket\": \"string\",
    \"homework\": \"string\"
  }},
  \"resources\": {{
    \"materials\": [\"material1\", \"material2\"],
    \"references\": [\"ref1\", \"ref2\"],
    \"additionalReading\": [\"reading1\", \"reading2\"]
  }},
  \"differentiation\": {{
    \"strugglingLearners\": \"string\",
    \"advancedStudents\": \"string\",
    \"multipleStyles\": \"string\"
  }}
}}",
        title = session.title,
        duration = session.duration,
        summary = session.summary,
    )
}

/// User instruction for a question set over one or more chapters.
pub fn questions_prompt(
    class_name: &str,
    subject_name: &str,
    chapters: &[String],
    question_requirements: &str,
) -> String {
    let chapters_text = chapters.join(", ");

    format!(
        "Create a comprehensive set of questions for {class_name} standard {subject_name} students.

Chapters to cover: {chapters_text}

Question Requirements: {question_requirements}

Please generate a diverse set of questions that:
- Cover all specified chapters proportionally
- Are age-appropriate for {class_name} standard students
- Follow CBSE/NCERT curriculum standards
- Include various difficulty levels (easy, medium, hard)
- Cover different question types (MCQ, short answer, long answer, application-based)
- Test conceptual understanding, not just memorization

For each question, provide:
1. Question text
2. Question type (MCQ, Short Answer, Long Answer, Application)
3. Difficulty level (Easy, Medium, Hard)
4. Chapter reference
5. Marks/Points
6. Expected answer/solution (for non-MCQ)
7. Options (for MCQ only)
8. Correct answer (for MCQ only)

Please respond with a JSON object containing an array of question objects with the following structure:
{{
  \"questions\": [
    {{
      \"id\": number,
      \"questionText\": \"string\",
      \"questionType\": \"MCQ|Short Answer|Long Answer|Application\",
      \"difficultyLevel\": \"Easy|Medium|Hard\",
      \"chapterReference\": \"string\",
      \"marks\": number,
      \"options\": [\"option1\", \"option2\", \"option3\", \"option4\"],
      \"correctAnswer\": \"string\",
      \"explanation\": \"string\"
    }}
  ],
  \"metadata\": {{
    \"totalQuestions\": number,
    \"questionTypeBreakdown\": {{
      \"MCQ\": number,
      \"Short Answer\": number,
      \"Long Answer\": number,
      \"Application\": number
    }},
    \"difficultyBreakdown\": {{
      \"Easy\": number,
      \"Medium\": number,
      \"Hard\": number
    }},
    \"chapterBreakdown\": {{
      \"chapter1\": number,
      \"chapter2\": number
    }},
    \"totalMarks\": number
  }}
}}"
    )
}

/// User instruction decomposing a chapter into atomic knowledge points.
pub fn knowledge_points_prompt(
    board: &str,
    grade: &str,
    subject: &str,
    chapter: &str,
    section: Option<&str>,
) -> String {
    let scope = match section {
        Some(section) => format!("Chapter: {chapter}\nSection: {section}"),
        None => format!("Chapter: {chapter}"),
    };

    format!(
        "Decompose the following curriculum content into atomic knowledge points for {grade} standard {subject} students ({board} board).

{scope}

Each knowledge point must be:
- Atomic: one concept, fact, or skill that can be taught on its own
- Teachable: expressible in a single focused explanation
- Assessable: testable with one or two targeted questions
- Tagged with a Bloom's taxonomy level (Remember, Understand, Apply, Analyze, Evaluate, Create)
- Tagged with a difficulty level (Easy, Medium, Hard)

List prerequisite knowledge points by id where one point builds on another.

Please respond with a JSON object with the following structure:
{{
  \"knowledge_points\": [
    {{
      \"id\": number,
      \"title\": \"string\",
      \"description\": \"string\",
      \"bloomLevel\": \"Remember|Understand|Apply|Analyze|Evaluate|Create\",
      \"difficultyLevel\": \"Easy|Medium|Hard\",
      \"prerequisites\": [number]
    }}
  ],
  \"metadata\": {{
    \"totalKnowledgePoints\": number,
    \"bloomBreakdown\": {{
      \"Remember\": number,
      \"Understand\": number,
      \"Apply\": number,
      \"Analyze\": number,
      \"Evaluate\": number,
      \"Create\": number
    }}
  }}
}}"
    )
}

/// System instruction for the student tutor, with optional subject/class
/// context lines appended when known.
pub fn student_tutor_system(subject_name: Option<&str>, class_name: Option<&str>) -> String {
    let mut prompt = String::from(STUDENT_TUTOR_BASE);
    if let Some(subject) = subject_name {
        prompt.push_str(&format!("\n\nSubject context: {subject}"));
    }
    if let Some(class) = class_name {
        prompt.push_str(&format!("\nClass/Grade: {class}"));
    }
    prompt.push_str("\n\nAlways be encouraging, patient, and thorough in your explanations.");
    prompt
}

/// User instruction for a tutoring turn: prior exchanges (oldest first)
/// followed by the current question.
pub fn student_question_prompt(
    question: &str,
    history: &[crate::schema::student::ConversationMessage],
) -> String {
    if history.is_empty() {
        return question.to_string();
    }

    let mut prompt = String::from("Previous conversation:\n");
    for message in history {
        prompt.push_str(&format!("{}: {}\n", message.role, message.content));
    }
    prompt.push_str(&format!("\nCurrent question: {question}"));
    prompt
}
